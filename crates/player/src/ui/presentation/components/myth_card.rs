//! Myth card with incremental text reveal
//!
//! The card plays its text back one character every [`REVEAL_TICK_MS`]
//! while `revealing` is set. The tick loop runs as a scope-owned task:
//! it is cancelled on restart and dropped with the component.

use dioxus::core::Task;
use dioxus::prelude::*;
use mythweaver_domain::common::paragraphs;
use mythweaver_domain::{Reveal, RevealStep, REVEAL_TICK_MS};

use crate::use_platform;

#[derive(Props, Clone, PartialEq)]
pub struct MythCardProps {
    /// Full story text; a new value restarts the reveal from zero
    pub text: String,
    /// Turning this off shows the remaining text immediately
    #[props(default = true)]
    pub revealing: bool,
    /// Fired once per text when everything is visible
    #[props(default)]
    pub on_complete: EventHandler<()>,
}

#[component]
pub fn MythCard(props: MythCardProps) -> Element {
    let platform = use_platform();
    let mut reveal = use_signal(|| Reveal::new(props.text.clone(), props.revealing));
    let mut ticker: Signal<Option<Task>> = use_signal(|| None);

    let on_complete = props.on_complete;
    let text = props.text.clone();
    let revealing = props.revealing;
    use_effect(use_reactive!(|(text, revealing)| {
        if reveal.peek().full_text() != text {
            if let Some(task) = ticker.write().take() {
                task.cancel();
            }
            reveal.set(Reveal::new(text, revealing));
        }

        if !revealing {
            if let Some(task) = ticker.write().take() {
                task.cancel();
            }
            if reveal.write().finish() == RevealStep::Completed {
                on_complete.call(());
            }
            return;
        }

        if ticker.peek().is_some() || reveal.peek().is_complete() {
            return;
        }

        let platform = platform.clone();
        let task = spawn(async move {
            loop {
                platform.sleep_ms(REVEAL_TICK_MS).await;
                let step = reveal.write().tick();
                match step {
                    RevealStep::Advanced => {}
                    RevealStep::Completed => {
                        on_complete.call(());
                        break;
                    }
                    RevealStep::Idle => break,
                }
            }
            ticker.set(None);
        });
        ticker.set(Some(task));
    }));

    let (visible, show_cursor) = {
        let reveal = reveal.read();
        let visible: Vec<String> = paragraphs(reveal.visible_text())
            .into_iter()
            .map(str::to_string)
            .collect();
        (visible, props.revealing && !reveal.is_complete())
    };
    let last = visible.len().saturating_sub(1);

    rsx! {
        div {
            class: "card myth-card",
            div {
                class: "myth-text",
                if visible.is_empty() && show_cursor {
                    p { class: "myth-paragraph", span { class: "typewriter-cursor animate-blink", "|" } }
                }
                for (index, paragraph) in visible.into_iter().enumerate() {
                    p {
                        key: "{index}",
                        class: "myth-paragraph",
                        "{paragraph}"
                        if show_cursor && index == last {
                            span { class: "typewriter-cursor animate-blink", "|" }
                        }
                    }
                }
            }
            div { class: "myth-card-flourish myth-card-flourish-top" }
            div { class: "myth-card-flourish myth-card-flourish-bottom" }
        }
    }
}
