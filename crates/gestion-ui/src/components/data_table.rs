//! Searchable data table.
//!
//! Renders a column header plus one row per record. The `filter` prop drives
//! live search: rows whose text does not contain the query keep their place
//! in the DOM but are hidden, so row identity (and the export row set, which
//! always uses the full data) is unaffected by searching.

use dioxus::prelude::*;

use gestion_core::export::Column;
use gestion_core::search::row_matches;

/// One table row: a stable key plus the rendered data cells.
///
/// Cells map to the non-action columns in order; the action column, when the
/// table has one, is rendered by the widget itself (delete button).
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn new(key: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            key: key.into(),
            cells,
        }
    }
}

/// Properties for the DataTable component
#[derive(Clone, PartialEq, Props)]
pub struct DataTableProps {
    /// Table element id; also the export identifier
    pub table_id: String,
    /// Column headers, action column included
    pub columns: Vec<Column>,
    /// Data rows (cells for non-action columns only)
    pub rows: Vec<TableRow>,
    /// Live search query; empty shows every row
    #[props(default)]
    pub filter: String,
    /// Delete handler for the action column, called with the row key
    pub on_delete: EventHandler<String>,
}

#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    rsx! {
        div { class: "table-wrapper",
            table { id: "{props.table_id}", class: "data-table",
                thead {
                    tr {
                        for column in props.columns.iter() {
                            th {
                                class: if column.actions { "acciones-col" } else { "" },
                                "{column.title}"
                            }
                        }
                    }
                }
                tbody {
                    if props.rows.is_empty() {
                        tr { class: "empty-row",
                            td { colspan: "{props.columns.len()}", "Sin registros" }
                        }
                    }
                    for row in props.rows.iter() {
                        DataRow {
                            key: "{row.key}",
                            visible: row_matches(&props.filter, &row.cells),
                            row: row.clone(),
                            on_delete: props.on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DataRow(row: TableRow, visible: bool, on_delete: EventHandler<String>) -> Element {
    let key = row.key.clone();

    rsx! {
        tr { class: if visible { "" } else { "row-hidden" },
            for cell in row.cells.iter() {
                td { "{cell}" }
            }
            td { class: "acciones-col",
                button {
                    class: "btn btn-danger btn-sm",
                    title: "Eliminar registro",
                    onclick: move |_| on_delete.call(key.clone()),
                    "Eliminar"
                }
            }
        }
    }
}

/// Live search box bound to a table.
#[component]
pub fn SearchBox(
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "Buscar...".to_string())] placeholder: String,
) -> Element {
    rsx! {
        input {
            class: "search-input",
            r#type: "search",
            value: "{value}",
            placeholder: "{placeholder}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}
