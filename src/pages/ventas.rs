//! Ventas pane: sales table, filters and the new-sale form.

use dioxus::prelude::*;

use gestion_core::Severity;
use gestion_ui::{
    use_alerts, Button, ButtonVariant, ConfirmDialog, DataTable, SearchBox, TableRow,
    DELETE_CONFIRM_MESSAGE,
};

use crate::actions::{self, RecordKind, TABLA_VENTAS};
use crate::app::Route;
use crate::components::SaleForm;
use crate::context::{use_snapshot, use_ui_store};

#[component]
pub fn Ventas() -> Element {
    let store = use_ui_store();
    let mut snapshot = use_snapshot();
    let mut alerts = use_alerts();

    // record this pane as the active tab
    use_effect(move || store.set_active_tab(Route::Ventas {}.fragment()));

    let mut search = use_signal(String::new);
    let mut show_filters = use_signal(|| true);
    let mut pending_delete: Signal<Option<u32>> = use_signal(|| None);

    let rows: Vec<TableRow> = snapshot
        .read()
        .ventas
        .iter()
        .map(|v| TableRow::new(v.id.to_string(), actions::ventas_cells(v)))
        .collect();

    let export = move |_| {
        actions::export_table(&snapshot.read(), TABLA_VENTAS, &actions::download_dir());
    };

    let confirm_delete = move |_| {
        if let Some(id) = pending_delete() {
            if actions::delete_record(&mut snapshot.write(), RecordKind::Venta, id) {
                alerts.push(Severity::Success, "Registro eliminado correctamente");
            }
        }
        pending_delete.set(None);
    };

    rsx! {
        section { class: "page",
            div { class: "page-header",
                h2 { class: "page-title", "Ventas" }
                div { class: "toolbar",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| show_filters.set(!show_filters()),
                        "Filtros"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: export,
                        "Exportar CSV"
                    }
                }
            }

            div { class: if show_filters() { "filter-panel" } else { "filter-panel hidden" },
                SearchBox {
                    value: search(),
                    oninput: move |v| search.set(v),
                    placeholder: "Buscar en ventas...".to_string(),
                }
            }

            DataTable {
                table_id: TABLA_VENTAS.to_string(),
                columns: actions::ventas_columns(),
                rows,
                filter: search(),
                on_delete: move |key: String| {
                    if let Ok(id) = key.parse() {
                        pending_delete.set(Some(id));
                    }
                },
            }

            SaleForm {}

            ConfirmDialog {
                show: pending_delete().is_some(),
                message: DELETE_CONFIRM_MESSAGE.to_string(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
