//! Inline form messages and toast notifications.

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MessageKind {
    #[display("error")]
    Error,
    #[display("success")]
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl FormMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn class(&self) -> String {
        format!("form-message {}", self.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Showing,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn animation(&self) -> &'static str {
        match self.phase {
            ToastPhase::Showing => "slideIn 0.3s ease-out",
            ToastPhase::Leaving => "slideOut 0.3s ease-in",
        }
    }
}

/// Visible toasts in the order they were raised.
///
/// Each toast runs its own lifecycle: the caller pushes it, flips it to
/// [`ToastPhase::Leaving`] after the display time and removes it after the
/// exit animation. Nothing here coordinates between toasts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            phase: ToastPhase::Showing,
        });
        id
    }

    pub fn begin_exit(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = ToastPhase::Leaving;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.toasts.iter().map(|t| t.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_class_carries_kind() {
        assert_eq!(FormMessage::error("x").class(), "form-message error");
        assert_eq!(FormMessage::success("x").class(), "form-message success");
    }

    #[test]
    fn toasts_have_independent_lifecycles() {
        let mut queue = ToastQueue::default();
        let first = queue.push("one");
        let second = queue.push("two");
        assert_ne!(first, second);

        queue.begin_exit(first);
        let phases: Vec<_> = queue.iter().map(|t| t.phase).collect();
        assert_eq!(phases, vec![ToastPhase::Leaving, ToastPhase::Showing]);

        queue.remove(first);
        assert_eq!(queue.messages(), vec!["two"]);
    }

    #[test]
    fn exit_animation_follows_phase() {
        let mut queue = ToastQueue::default();
        let id = queue.push("hi");
        assert_eq!(queue.iter().next().unwrap().animation(), "slideIn 0.3s ease-out");
        queue.begin_exit(id);
        assert_eq!(queue.iter().next().unwrap().animation(), "slideOut 0.3s ease-in");
    }

    #[test]
    fn removing_unknown_id_is_a_noop() {
        let mut queue = ToastQueue::default();
        queue.push("hi");
        queue.begin_exit(42);
        queue.remove(42);
        assert_eq!(queue.len(), 1);
    }
}
