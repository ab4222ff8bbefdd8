//! Productos pane: product catalogue table.

use dioxus::prelude::*;

use gestion_core::Severity;
use gestion_ui::{
    use_alerts, Button, ButtonVariant, ConfirmDialog, DataTable, SearchBox, TableRow,
    DELETE_CONFIRM_MESSAGE,
};

use crate::actions::{self, RecordKind, TABLA_PRODUCTOS};
use crate::app::Route;
use crate::context::{use_snapshot, use_ui_store};

#[component]
pub fn Productos() -> Element {
    let store = use_ui_store();
    let mut snapshot = use_snapshot();
    let mut alerts = use_alerts();

    use_effect(move || store.set_active_tab(Route::Productos {}.fragment()));

    let mut search = use_signal(String::new);
    let mut pending_delete: Signal<Option<u32>> = use_signal(|| None);

    let rows: Vec<TableRow> = snapshot
        .read()
        .productos
        .iter()
        .map(|p| TableRow::new(p.id.to_string(), actions::productos_cells(p)))
        .collect();

    let export = move |_| {
        actions::export_table(&snapshot.read(), TABLA_PRODUCTOS, &actions::download_dir());
    };

    let confirm_delete = move |_| {
        if let Some(id) = pending_delete() {
            if actions::delete_record(&mut snapshot.write(), RecordKind::Producto, id) {
                alerts.push(Severity::Success, "Registro eliminado correctamente");
            }
        }
        pending_delete.set(None);
    };

    rsx! {
        section { class: "page",
            div { class: "page-header",
                h2 { class: "page-title", "Productos" }
                div { class: "toolbar",
                    SearchBox {
                        value: search(),
                        oninput: move |v| search.set(v),
                        placeholder: "Buscar productos...".to_string(),
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: export,
                        "Exportar CSV"
                    }
                }
            }

            DataTable {
                table_id: TABLA_PRODUCTOS.to_string(),
                columns: actions::productos_columns(),
                rows,
                filter: search(),
                on_delete: move |key: String| {
                    if let Ok(id) = key.parse() {
                        pending_delete.set(Some(id));
                    }
                },
            }

            ConfirmDialog {
                show: pending_delete().is_some(),
                message: DELETE_CONFIRM_MESSAGE.to_string(),
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
