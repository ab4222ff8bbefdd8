//! Navigation tab bar.
//!
//! Horizontal header with the app title, one tab per page and the
//! auto-refresh toggle on the right.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::AutoRefreshToggle;

/// The panel's tab panes.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PanelTab {
    Ventas,
    Productos,
    Clientes,
}

impl PanelTab {
    /// Get the display name for this tab
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelTab::Ventas => "Ventas",
            PanelTab::Productos => "Productos",
            PanelTab::Clientes => "Clientes",
        }
    }

    /// Get the route for this tab
    pub fn route(&self) -> Route {
        match self {
            PanelTab::Ventas => Route::Ventas {},
            PanelTab::Productos => Route::Productos {},
            PanelTab::Clientes => Route::Clientes {},
        }
    }
}

/// Navigation tab bar component
#[component]
pub fn NavTabs() -> Element {
    let current: Route = use_route();

    let tabs = [PanelTab::Ventas, PanelTab::Productos, PanelTab::Clientes];

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                h1 { class: "app-title", "Gestión Mostrador" }

                nav { class: "nav-tabs",
                    for tab in tabs {
                        Link {
                            to: tab.route(),
                            class: if tab.route() == current { "nav-tab active" } else { "nav-tab" },
                            "{tab.display_name()}"
                        }
                    }
                }

                AutoRefreshToggle {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_a_fragment() {
        for tab in [PanelTab::Ventas, PanelTab::Productos, PanelTab::Clientes] {
            let fragment = tab.route().fragment();
            assert!(fragment.starts_with('#'));
            assert_eq!(Route::from_fragment(fragment), Some(tab.route()));
        }
    }
}
