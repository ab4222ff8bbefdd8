//! Clientes pane: client list table.

use dioxus::prelude::*;

use gestion_core::Severity;
use gestion_ui::{
    use_alerts, Button, ButtonVariant, ConfirmDialog, DataTable, SearchBox, TableRow,
    DELETE_CONFIRM_MESSAGE,
};

use crate::actions::{self, RecordKind, TABLA_CLIENTES};
use crate::app::Route;
use crate::context::{use_snapshot, use_ui_store};

#[component]
pub fn Clientes() -> Element {
    let store = use_ui_store();
    let mut snapshot = use_snapshot();
    let mut alerts = use_alerts();

    use_effect(move || store.set_active_tab(Route::Clientes {}.fragment()));

    let mut search = use_signal(String::new);
    let mut pending_delete: Signal<Option<u32>> = use_signal(|| None);

    let rows: Vec<TableRow> = snapshot
        .read()
        .clientes
        .iter()
        .map(|c| TableRow::new(c.id.to_string(), actions::clientes_cells(c)))
        .collect();

    let export = move |_| {
        actions::export_table(&snapshot.read(), TABLA_CLIENTES, &actions::download_dir());
    };

    let confirm_delete = move |_| {
        if let Some(id) = pending_delete() {
            if actions::delete_record(&mut snapshot.write(), RecordKind::Cliente, id) {
                alerts.push(Severity::Success, "Registro eliminado correctamente");
            }
        }
        pending_delete.set(None);
    };

    rsx! {
        section { class: "page",
            div { class: "page-header",
                h2 { class: "page-title", "Clientes" }
                div { class: "toolbar",
                    SearchBox {
                        value: search(),
                        oninput: move |v| search.set(v),
                        placeholder: "Buscar clientes...".to_string(),
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: export,
                        "Exportar CSV"
                    }
                }
            }

            DataTable {
                table_id: TABLA_CLIENTES.to_string(),
                columns: actions::clientes_columns(),
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
