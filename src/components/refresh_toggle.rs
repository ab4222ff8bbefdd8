//! Auto-refresh toggle.
//!
//! A switch that reloads the data snapshot every thirty seconds while
//! enabled. The controller guarantees at most one timer, so flipping the
//! switch repeatedly can never stack reloads.

use dioxus::prelude::*;

use gestion_core::refresh::REFRESH_INTERVAL;
use gestion_ui::use_toasts;

use crate::context::{get_data_dir, use_refresh, use_snapshot};
use crate::records::Snapshot;

#[component]
pub fn AutoRefreshToggle() -> Element {
    let mut refresh = use_refresh();
    let mut snapshot = use_snapshot();
    let mut toasts = use_toasts();

    let enabled = refresh.read().is_enabled();

    let on_toggle = move |_: FormEvent| {
        let currently_enabled = refresh.peek().is_enabled();
        if !currently_enabled {
            let mut ticks = refresh.write().enable(REFRESH_INTERVAL);
            spawn(async move {
                // the stream closes when the timer is cancelled
                while ticks.recv().await.is_some() {
                    snapshot.set(Snapshot::load(&get_data_dir()));
                    tracing::debug!("datos recargados por actualización automática");
                }
            });
            toasts.info(
                "Actualización automática activada",
                "Los datos se actualizarán cada 30 segundos",
            );
        } else {
            refresh.write().disable();
            toasts.info("Actualización automática", "Desactivada");
        }
    };

    rsx! {
        div { class: "auto-refresh",
            input {
                id: "autoRefreshToggle",
                class: "auto-refresh-check",
                r#type: "checkbox",
                checked: enabled,
                oninput: on_toggle,
            }
            label {
                class: "auto-refresh-label",
                r#for: "autoRefreshToggle",
                "Actualización automática"
            }
        }
    }
}
