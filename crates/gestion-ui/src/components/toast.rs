//! Toast host and hook.
//!
//! The shell provides a single `Signal<ToastQueue>` context; [`ToastHost`]
//! renders it as the fixed-position stack and [`use_toasts`] hands
//! components a handle that pushes a toast and schedules its removal after
//! the fixed lifetime.

use dioxus::prelude::*;

use gestion_core::toast::{Toast, ToastQueue, TOAST_LIFETIME};
use gestion_core::Severity;

/// Handle for showing toasts from event handlers.
#[derive(Clone, Copy)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    /// Show a toast and schedule its auto-dismissal.
    pub fn show(&mut self, level: Severity, title: &str, message: &str) {
        let toast = Toast::new(level, title, message);
        let id = toast.id.clone();
        tracing::debug!(toast = %id, "toast mostrado");
        self.queue.write().push(toast);

        let mut queue = self.queue;
        spawn(async move {
            tokio::time::sleep(TOAST_LIFETIME).await;
            queue.write().dismiss(&id);
        });
    }

    pub fn info(&mut self, title: &str, message: &str) {
        self.show(Severity::Info, title, message);
    }

    pub fn success(&mut self, title: &str, message: &str) {
        self.show(Severity::Success, title, message);
    }

    pub fn warning(&mut self, title: &str, message: &str) {
        self.show(Severity::Warning, title, message);
    }

    pub fn danger(&mut self, title: &str, message: &str) {
        self.show(Severity::Danger, title, message);
    }
}

/// Hook to access the shared toast queue from context.
pub fn use_toasts() -> Toasts {
    Toasts {
        queue: use_context::<Signal<ToastQueue>>(),
    }
}

/// Fixed-position container stacking toasts in append order.
#[component]
pub fn ToastHost() -> Element {
    let queue = use_context::<Signal<ToastQueue>>();
    let toasts: Vec<Toast> = queue.read().iter().cloned().collect();

    rsx! {
        div { class: "toast-container",
            for toast in toasts.iter() {
                ToastView { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastView(toast: Toast) -> Element {
    let mut queue = use_context::<Signal<ToastQueue>>();
    let id = toast.id.clone();
    let level = toast.level.css_suffix();

    rsx! {
        div {
            id: "{toast.id}",
            class: "toast toast-{level}",
            role: "alert",

            div { class: "toast-body",
                strong { "{toast.title}" }
                br {}
                "{toast.message}"
            }
            button {
                class: "btn-close",
                "aria-label": "Cerrar",
                onclick: move |_| queue.write().dismiss(&id),
                "\u{00D7}"
            }
        }
    }
}
