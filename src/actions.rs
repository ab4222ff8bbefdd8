//! Explicit action routing for panel controls.
//!
//! Toolbar and row controls never dispatch on markup conventions; each one
//! calls a named handler here, and exportable tables are looked up through
//! an explicit identifier registry. That keeps the control surface of every
//! page visible in one place and testable without a UI.

use std::path::{Path, PathBuf};

use gestion_core::export::{self, Column, TableExport};
use gestion_core::format::{format_currency, format_date};

use crate::records::{Cliente, Producto, Snapshot, Venta};

/// Table identifiers, the export binding surface of each page.
pub const TABLA_VENTAS: &str = "tablaVentas";
pub const TABLA_PRODUCTOS: &str = "tablaProductos";
pub const TABLA_CLIENTES: &str = "tablaClientes";

/// Kinds of records the panel can delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Venta,
    Producto,
    Cliente,
}

pub fn ventas_columns() -> Vec<Column> {
    vec![
        Column::data("Fecha"),
        Column::data("Cliente"),
        Column::data("Producto"),
        Column::data("Cantidad"),
        Column::data("Precio"),
        Column::data("Total"),
        Column::actions("Acciones"),
    ]
}

pub fn productos_columns() -> Vec<Column> {
    vec![
        Column::data("Nombre"),
        Column::data("Marca"),
        Column::data("Alta"),
        Column::actions("Acciones"),
    ]
}

pub fn clientes_columns() -> Vec<Column> {
    vec![
        Column::data("Nombre"),
        Column::data("Apellido"),
        Column::data("Alta"),
        Column::actions("Acciones"),
    ]
}

/// Rendered cells of one sale row, as they appear on screen.
pub fn ventas_cells(venta: &Venta) -> Vec<String> {
    vec![
        format_date(&venta.fecha),
        venta.cliente.clone(),
        venta.producto.clone(),
        venta.cantidad.to_string(),
        format_currency(venta.precio),
        format_currency(venta.total()),
    ]
}

pub fn productos_cells(producto: &Producto) -> Vec<String> {
    vec![
        producto.nombre.clone(),
        producto.marca.clone(),
        format_date(&producto.fecha_alta),
    ]
}

pub fn clientes_cells(cliente: &Cliente) -> Vec<String> {
    vec![
        cliente.nombre.clone(),
        cliente.apellido.clone(),
        format_date(&cliente.fecha_alta),
    ]
}

/// Resolve a table identifier to its export snapshot.
///
/// This is the registry mapping identifiers to rendered tables; unknown
/// identifiers resolve to nothing and callers treat that as a no-op.
pub fn resolve_table(snapshot: &Snapshot, table_id: &str) -> Option<TableExport> {
    let (columns, rows): (Vec<Column>, Vec<Vec<String>>) = match table_id {
        TABLA_VENTAS => (
            ventas_columns(),
            snapshot.ventas.iter().map(|v| ventas_cells(v)).collect(),
        ),
        TABLA_PRODUCTOS => (
            productos_columns(),
            snapshot.productos.iter().map(|p| productos_cells(p)).collect(),
        ),
        TABLA_CLIENTES => (
            clientes_columns(),
            snapshot.clientes.iter().map(|c| clientes_cells(c)).collect(),
        ),
        _ => return None,
    };

    let mut table = TableExport::new(table_id, columns);
    for row in rows {
        table.push_row(row);
    }
    Some(table)
}

/// Export a table by identifier into `dir`.
///
/// An unknown identifier is a silent no-op; write failures are logged and
/// never surfaced to the user.
pub fn export_table(snapshot: &Snapshot, table_id: &str, dir: &Path) {
    let Some(table) = resolve_table(snapshot, table_id) else {
        tracing::warn!(table = %table_id, "tabla desconocida, exportación omitida");
        return;
    };
    if let Err(e) = export::write_csv(&table, dir, None) {
        tracing::error!(table = %table_id, error = %e, "no se pudo exportar la tabla");
    }
}

/// Where exports land: the user's download directory, or a subdirectory of
/// the data directory when the platform has none.
pub fn download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| crate::get_data_dir().join("exports"))
}

/// Remove a record from the local snapshot. Returns whether a row went away.
pub fn delete_record(snapshot: &mut Snapshot, kind: RecordKind, id: u32) -> bool {
    let removed = match kind {
        RecordKind::Venta => snapshot.remove_venta(id),
        RecordKind::Producto => snapshot.remove_producto(id),
        RecordKind::Cliente => snapshot.remove_cliente(id),
    };
    if removed {
        tracing::info!(kind = ?kind, id, "registro eliminado");
    } else {
        tracing::warn!(kind = ?kind, id, "el registro a eliminar ya no existe");
    }
    removed
}

/// Add a sale captured by the form to the local snapshot.
pub fn register_venta(
    snapshot: &mut Snapshot,
    fecha: String,
    cliente: String,
    producto: String,
    cantidad: u32,
    precio: f64,
) -> u32 {
    let id = snapshot.next_venta_id();
    snapshot.ventas.push(Venta {
        id,
        fecha,
        cliente,
        producto,
        cantidad,
        precio,
    });
    tracing::info!(id, "venta registrada");
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestion_core::export::table_to_csv;

    #[test]
    fn registry_resolves_every_page_table() {
        let snapshot = Snapshot::starter();
        for id in [TABLA_VENTAS, TABLA_PRODUCTOS, TABLA_CLIENTES] {
            let table = resolve_table(&snapshot, id).expect("known table");
            assert_eq!(table.id, id);
            assert!(!table.columns.is_empty());
        }
    }

    #[test]
    fn unknown_identifier_resolves_to_nothing() {
        assert!(resolve_table(&Snapshot::starter(), "tablaCompras").is_none());
    }

    #[test]
    fn export_of_unknown_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        export_table(&Snapshot::starter(), "tablaCompras", dir.path());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn export_writes_the_rendered_rows() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::starter();
        export_table(&snapshot, TABLA_VENTAS, dir.path());

        let entry = std::fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        let written = std::fs::read_to_string(entry.path()).unwrap();
        let expected = table_to_csv(&resolve_table(&snapshot, TABLA_VENTAS).unwrap());
        assert_eq!(written, expected);
        assert_eq!(written.lines().count(), snapshot.ventas.len() + 1);
    }

    #[test]
    fn sale_rows_render_localized_cells() {
        let snapshot = Snapshot::starter();
        let cells = ventas_cells(&snapshot.ventas[0]);
        assert_eq!(cells[0], "28/7/2026");
        assert_eq!(cells[4], "$ 1.250,00");
        assert_eq!(cells[5], "$ 3.750,00");
    }

    #[test]
    fn delete_edits_only_the_local_copy() {
        let mut snapshot = Snapshot::starter();
        assert!(delete_record(&mut snapshot, RecordKind::Producto, 2));
        assert!(!delete_record(&mut snapshot, RecordKind::Producto, 2));
        assert_eq!(snapshot.productos.len(), 2);
    }

    #[test]
    fn registered_sale_lands_in_the_snapshot() {
        let mut snapshot = Snapshot::starter();
        let id = register_venta(
            &mut snapshot,
            "2026-08-05".to_string(),
            "Suárez, Ana".to_string(),
            "Lavandina Ayudín 1L".to_string(),
            2,
            1250.0,
        );
        assert_eq!(id, 4);
        assert_eq!(snapshot.ventas.last().unwrap().total(), 2500.0);
    }
}
