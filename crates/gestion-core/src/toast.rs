//! Toast notifications.
//!
//! Toasts are transient banners stacked in a single fixed-position container,
//! shown for [`TOAST_LIFETIME`] and then removed. Identifiers are derived
//! from the creation timestamp (ULIDs are timestamp-ordered), so ids are
//! unique and sort in append order.

use std::time::Duration;

use ulid::Ulid;

use crate::severity::Severity;

/// Fixed visible lifetime of a toast before auto-dismissal.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// A single toast notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Generated identifier, `toast-<ulid>`.
    pub id: String,
    pub level: Severity,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn new(level: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: format!("toast-{}", Ulid::new()),
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// The shared toast stack. Toasts coexist and render in append order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast, returning its id for later dismissal.
    pub fn push(&mut self, toast: Toast) -> String {
        let id = toast.id.clone();
        self.toasts.push(toast);
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
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
}
