//! Share dialog
//!
//! Clicks inside the dialog body stop propagating so they never reach the
//! backdrop, which closes the dialog.

use dioxus::prelude::*;
use mythweaver_domain::SharePlatform;

#[derive(Props, Clone, PartialEq)]
pub struct ShareModalProps {
    pub is_open: bool,
    /// Story title shown under the heading
    pub title: String,
    pub on_close: EventHandler<()>,
    pub on_share: EventHandler<SharePlatform>,
}

#[component]
pub fn ShareModal(props: ShareModalProps) -> Element {
    if !props.is_open {
        return rsx! {};
    }

    let on_close = props.on_close;
    let on_share = props.on_share;

    rsx! {
        div {
            class: "modal-backdrop animate-fade-in",
            onclick: move |_| on_close.call(()),

            div {
                class: "card modal share-modal animate-scale-in",
                onclick: move |e: MouseEvent| e.stop_propagation(),

                div {
                    class: "modal-header",
                    div {
                        h3 { class: "modal-title", "Share Your Myth" }
                        p { class: "modal-subtitle", "{props.title}" }
                    }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div {
                    class: "share-options",
                    for platform in SharePlatform::all().iter().copied() {
                        button {
                            key: "{platform}",
                            r#type: "button",
                            class: "share-option",
                            onclick: move |_| on_share.call(platform),
                            span {
                                class: "share-badge {platform.badge_class()}",
                                "{platform.icon()}"
                            }
                            div {
                                class: "share-option-text",
                                div { class: "share-option-name", "{platform.display_name()}" }
                                div { class: "share-option-description", "{platform.description()}" }
                            }
                        }
                    }
                }

                div {
                    class: "modal-footer",
                    p { "Help others discover the magic of ancient storytelling" }
                }
            }
        }
    }
}
