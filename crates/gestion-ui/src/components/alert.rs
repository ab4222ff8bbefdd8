//! Flash alert area and hook.
//!
//! Alerts come from page actions (deleted record, reloaded data) and render
//! under the navigation bar. The shell arms the one-shot sweep that clears
//! whatever is on screen a few seconds after startup.

use dioxus::prelude::*;

use gestion_core::alert::AlertStack;
use gestion_core::Severity;

/// Handle for pushing and dismissing alerts.
#[derive(Clone, Copy)]
pub struct Alerts {
    stack: Signal<AlertStack>,
}

impl Alerts {
    pub fn push(&mut self, level: Severity, message: &str) {
        self.stack.write().push(level, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.stack.write().dismiss(id);
    }

    /// Close every alert currently on screen.
    pub fn clear(&mut self) {
        self.stack.write().clear();
    }
}

/// Hook to access the shared alert stack from context.
pub fn use_alerts() -> Alerts {
    Alerts {
        stack: use_context::<Signal<AlertStack>>(),
    }
}

/// Renders the current alert stack.
#[component]
pub fn AlertArea() -> Element {
    let stack = use_context::<Signal<AlertStack>>();
    let mut alerts = use_alerts();
    let current: Vec<(u64, &'static str, String)> = stack
        .read()
        .iter()
        .map(|a| (a.id, a.level.css_suffix(), a.message.clone()))
        .collect();

    rsx! {
        div { class: "alert-area",
            for (id, level, message) in current {
                div { class: "alert alert-{level}", role: "alert",
                    span { "{message}" }
                    button {
                        class: "btn-close",
                        "aria-label": "Cerrar",
                        onclick: move |_| alerts.dismiss(id),
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
