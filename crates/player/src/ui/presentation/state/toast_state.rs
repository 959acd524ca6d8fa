//! Toast notifications
//!
//! [`ToastQueue`] is plain data so ordering and dismissal can be tested
//! without a runtime; [`ToastState`] wraps it in a signal and schedules the
//! auto-dismiss.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::ui::Platform;

/// Toasts disappear on their own after this long
pub const TOAST_DISMISS_MS: u64 = 4000;

/// Older toasts are dropped once this many are on screen
pub const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast; false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Toast state shared by every page
#[derive(Clone)]
pub struct ToastState {
    queue: Signal<ToastQueue>,
    platform: Platform,
}

impl ToastState {
    /// Must be created inside an active Dioxus runtime
    pub fn new(platform: Platform) -> Self {
        Self {
            queue: Signal::new(ToastQueue::default()),
            platform,
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.read().toasts().to_vec()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    fn show(&mut self, kind: ToastKind, message: String) {
        tracing::debug!(?kind, %message, "Toast");
        let id = self.queue.write().push(kind, message);

        // Not tied to the calling page: a toast raised just before a
        // redirect must still expire.
        let mut queue = self.queue;
        let expire = self.platform.sleep_ms(TOAST_DISMISS_MS);
        spawn_forever(async move {
            expire.await;
            queue.write().dismiss(id);
        });
    }
}

/// Hook to access the ToastState from context
pub fn use_toast_state() -> ToastState {
    use_context::<ToastState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_order_is_preserved() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "Myth downloaded!");
        let second = queue.push(ToastKind::Error, "Failed to copy link");

        assert_ne!(first, second);
        let messages: Vec<_> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Myth downloaded!", "Failed to copy link"]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "one");
        let second = queue.push(ToastKind::Success, "two");

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn overflow_drops_the_oldest() {
        let mut queue = ToastQueue::default();
        for i in 0..(MAX_VISIBLE_TOASTS + 2) {
            queue.push(ToastKind::Error, format!("toast {}", i));
        }

        assert_eq!(queue.toasts().len(), MAX_VISIBLE_TOASTS);
        assert_eq!(queue.toasts()[0].message, "toast 2");
    }

    #[test]
    fn dismissing_everything_empties_the_queue() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Success, "Link copied to clipboard!");
        queue.dismiss(id);
        assert!(queue.is_empty());
    }
}
