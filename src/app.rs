use dioxus::prelude::*;

use gestion_core::{AlertStack, OverlayState, RefreshController, ToastQueue, UiStateStore};

use crate::components::PanelShell;
use crate::context::get_data_dir;
use crate::pages::{Clientes, Productos, Ventas};
use crate::records::Snapshot;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// Each route is one tab pane of the panel; the active one is persisted by
/// its fragment identifier and restored on the next launch.
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[layout(PanelShell)]
    #[route("/")]
    Ventas {},
    #[route("/productos")]
    Productos {},
    #[route("/clientes")]
    Clientes {},
}

impl Route {
    /// Fragment identifier persisted as the active tab.
    pub fn fragment(&self) -> &'static str {
        match self {
            Route::Ventas {} => "#ventas",
            Route::Productos {} => "#productos",
            Route::Clientes {} => "#clientes",
        }
    }

    /// Resolve a stored fragment back to its tab, if one still matches.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        match fragment {
            "#ventas" => Some(Route::Ventas {}),
            "#productos" => Some(Route::Productos {}),
            "#clientes" => Some(Route::Clientes {}),
            _ => None,
        }
    }
}

/// Root application component.
///
/// Provides global styles, the shared panel state and routing.
#[component]
pub fn App() -> Element {
    // Shared state provided to all child components
    let snapshot: Signal<Snapshot> = use_signal(|| Snapshot::load(&get_data_dir()));
    let overlay: Signal<OverlayState> = use_signal(OverlayState::new);
    let toasts: Signal<ToastQueue> = use_signal(ToastQueue::new);
    let alerts: Signal<AlertStack> = use_signal(AlertStack::new);
    let refresh: Signal<RefreshController> = use_signal(RefreshController::new);

    use_context_provider(|| UiStateStore::open(get_data_dir()));
    use_context_provider(|| snapshot);
    use_context_provider(|| overlay);
    use_context_provider(|| toasts);
    use_context_provider(|| alerts);
    use_context_provider(|| refresh);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_roundtrip() {
        for route in [Route::Ventas {}, Route::Productos {}, Route::Clientes {}] {
            assert_eq!(Route::from_fragment(route.fragment()), Some(route.clone()));
        }
    }

    #[test]
    fn unknown_fragment_resolves_to_nothing() {
        assert_eq!(Route::from_fragment("#compras"), None);
        assert_eq!(Route::from_fragment(""), None);
    }
}
