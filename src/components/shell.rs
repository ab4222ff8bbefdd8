//! Panel shell: shared chrome and scheduled sweeps.
//!
//! The shell wraps every tab pane. On mount it restores the persisted tab,
//! arms the overlay cleanup triggers (immediate, repeating and post-render)
//! and the one-shot alert sweep.

use dioxus::prelude::*;

use gestion_core::alert::ALERT_AUTO_DISMISS;
use gestion_core::overlay::{CLEANUP_INTERVAL, POST_RENDER_CLEANUP_DELAY};
use gestion_ui::{use_alerts, AlertArea, ToastHost};

use crate::app::Route;
use crate::components::NavTabs;
use crate::context::{use_overlay, use_ui_store};

/// Shared layout wrapping every tab pane.
#[component]
pub fn PanelShell() -> Element {
    let store = use_ui_store();
    let mut overlay = use_overlay();
    let mut alerts = use_alerts();
    let navigator = use_navigator();

    // captured at first render, before any pane can record itself as shown
    let restore_target = use_hook(|| store.active_tab());

    use_effect(move || {
        // restore the last shown tab; a fragment with no matching pane is
        // silently ignored
        if let Some(fragment) = restore_target.clone() {
            match Route::from_fragment(&fragment) {
                Some(route) => {
                    navigator.push(route);
                }
                None => {
                    tracing::debug!(tab = %fragment, "la pestaña guardada ya no existe");
                }
            }
        }

        // overlay cleanup: once now, once shortly after the first render
        // settles, and on a repeating sweep from then on
        overlay.write().cleanup();
        spawn(async move {
            tokio::time::sleep(POST_RENDER_CLEANUP_DELAY).await;
            overlay.write().cleanup();
        });
        spawn(async move {
            let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
            interval.tick().await;
            loop {
                interval.tick().await;
                if !overlay.peek().is_clean() {
                    overlay.write().cleanup();
                }
            }
        });

        // one-shot sweep: alerts still on screen a few seconds in are closed
        spawn(async move {
            tokio::time::sleep(ALERT_AUTO_DISMISS).await;
            alerts.clear();
        });
    });

    let modal_open = overlay.read().modal_open();
    let backdrop = overlay.read().backdrop_count() > 0;

    rsx! {
        div { class: if modal_open { "panel-body modal-open" } else { "panel-body" },
            if backdrop {
                div { class: "modal-backdrop" }
            }
            NavTabs {}
            AlertArea {}
            main { class: "panel-content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}
