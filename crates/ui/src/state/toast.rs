//! Toast notifications
//!
//! Success and error toasts raised by mutations. The overlay component
//! renders the queue and dismisses entries after a short delay.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub level: ToastLevel,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, text: impl Into<String>, level: ToastLevel) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            text: text.into(),
            level,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Global toast queue
pub static TOASTS: GlobalSignal<ToastQueue> = Signal::global(ToastQueue::default);

pub fn toast_success(text: impl Into<String>) {
    TOASTS.write().push(text, ToastLevel::Success);
}

pub fn toast_error(text: impl Into<String>) {
    TOASTS.write().push(text, ToastLevel::Error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push("Saved", ToastLevel::Success);
        let second = queue.push("Failed", ToastLevel::Error);
        assert_eq!(queue.toasts.len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].id, second);
    }
}
