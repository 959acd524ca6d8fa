//! UI state containers provided through Dioxus context

mod toast_state;

pub use toast_state::{
    use_toast_state, Toast, ToastKind, ToastQueue, ToastState, MAX_VISIBLE_TOASTS,
    TOAST_DISMISS_MS,
};
