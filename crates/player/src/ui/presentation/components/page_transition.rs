use dioxus::prelude::*;

/// Entrance animation applied when a page mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    Fade,
    /// Fade in while sliding from the right
    FadeSlide,
}

impl Transition {
    pub fn class(&self) -> &'static str {
        match self {
            Transition::Fade => "animate-fade-in",
            Transition::FadeSlide => "animate-fade-slide-in",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PageTransitionProps {
    #[props(default)]
    pub kind: Transition,
    pub children: Element,
}

#[component]
pub fn PageTransition(props: PageTransitionProps) -> Element {
    rsx! {
        div {
            class: "page {props.kind.class()}",
            {props.children}
        }
    }
}
