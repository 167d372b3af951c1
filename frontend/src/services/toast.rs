//! Transient notifications.
//!
//! [`ToastQueue`] is the plain data structure; [`ToastContext`] wraps it in a
//! signal, provides it at the application root and schedules auto-dismiss.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_DURATION_MS};
use crate::types::{Toast, ToastLevel};

/// Bounded queue of visible toasts, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(MAX_TOASTS)
    }
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    /// Add a toast and return its id. Drops the oldest when full.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        if self.toasts.len() > self.capacity {
            let overflow = self.toasts.len() - self.capacity;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Toast state shared through the component tree.
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    /// Show a toast; it disappears after [`TOAST_DURATION_MS`].
    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            ToastLevel::Error => log::error!("{} {}", level.emoji(), message),
            ToastLevel::Warning => log::warn!("{} {}", level.emoji(), message),
            _ => log::info!("{} {}", level.emoji(), message),
        }

        let Some(id) = self.queue.try_update(|q| q.push(level, message)) else {
            return;
        };

        let ctx = *self;
        Timeout::new(TOAST_DURATION_MS, move || ctx.dismiss(id)).forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        // The root may already be unmounted when a timer fires
        let _ = self.queue.try_update(|q| q.dismiss(id));
    }

    /// Current toasts (tracked).
    pub fn items(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

/// Create the toast context at the application root.
pub fn provide_toast_context() -> ToastContext {
    let ctx = ToastContext {
        queue: create_rw_signal(ToastQueue::default()),
    };
    provide_context(ctx);
    ctx
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new(3);
        let a = queue.push(ToastLevel::Info, "a");
        let b = queue.push(ToastLevel::Error, "b");
        assert!(b > a);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.toasts()[1].level, ToastLevel::Error);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut queue = ToastQueue::new(2);
        queue.push(ToastLevel::Info, "first");
        queue.push(ToastLevel::Info, "second");
        queue.push(ToastLevel::Info, "third");

        let messages: Vec<_> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "third"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastLevel::Success, "saved");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }
}
