//! Toast host rendered once by the app shell

use dioxus::prelude::*;

use crate::presentation::state::use_toast_state;

/// Stack of active toasts; click one to dismiss it early
#[component]
pub fn ToastHost() -> Element {
    let toast_state = use_toast_state();
    let toasts = toast_state.toasts();

    rsx! {
        div {
            class: "toast-host",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "toast {toast.kind.class()} animate-slide-up",
                    onclick: {
                        let mut toast_state = toast_state.clone();
                        let id = toast.id;
                        move |_| toast_state.dismiss(id)
                    },
                    span { class: "toast-icon", "{toast.kind.icon()}" }
                    span { class: "toast-message", "{toast.message}" }
                }
            }
        }
    }
}
