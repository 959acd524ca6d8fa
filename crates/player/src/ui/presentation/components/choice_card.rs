use dioxus::prelude::*;
use mythweaver_domain::Choice;

#[derive(Props, Clone, PartialEq)]
pub struct ChoiceCardProps {
    pub choice: Choice,
    /// Zero-based position, shown as 1, 2, 3...
    pub index: usize,
    #[props(default)]
    pub selected: bool,
    /// Receives the choice id
    pub on_select: EventHandler<String>,
}

/// One selectable ending; the full outcome is rendered by the page
#[component]
pub fn ChoiceCard(props: ChoiceCardProps) -> Element {
    let id = props.choice.id.clone();
    let on_select = props.on_select;
    let number = props.index + 1;
    let class = if props.selected {
        "choice-card choice-card-selected"
    } else {
        "choice-card"
    };

    rsx! {
        button {
            r#type: "button",
            class,
            onclick: move |_| on_select.call(id.clone()),

            div {
                class: "choice-header",
                span { class: "choice-number", "{number}" }
                h3 { class: "choice-label", "{props.choice.label}" }
            }
            p { class: "choice-preview", "{props.choice.preview()}" }

            if props.selected {
                div {
                    class: "choice-hint animate-fade-in",
                    "Click to see the full outcome below"
                }
            }
        }
    }
}
