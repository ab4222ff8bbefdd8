//! Local data snapshot.
//!
//! View models for the rows the panel displays: sales, products and clients.
//! The snapshot is a local read-only copy (`snapshot.json` in the data
//! directory) of what the management backend owns; the auto-refresh timer
//! re-reads it, and row deletion only edits this local copy. Until a real
//! snapshot lands on disk a small built-in dataset keeps the panel usable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// File name of the snapshot inside the data directory.
pub const SNAPSHOT_FILE: &str = "snapshot.json";

/// One registered sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venta {
    pub id: u32,
    /// ISO date (`YYYY-MM-DD`)
    pub fecha: String,
    pub cliente: String,
    pub producto: String,
    pub cantidad: u32,
    /// Unit price in ARS
    pub precio: f64,
}

impl Venta {
    /// Line total, unit price × quantity.
    pub fn total(&self) -> f64 {
        self.precio * self.cantidad as f64
    }
}

/// One catalogued product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: u32,
    pub nombre: String,
    pub marca: String,
    /// ISO date the product entered the catalogue
    pub fecha_alta: String,
}

/// One registered client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: u32,
    pub nombre: String,
    pub apellido: String,
    /// ISO date the client was registered
    pub fecha_alta: String,
}

/// The rows every page renders from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub ventas: Vec<Venta>,
    #[serde(default)]
    pub productos: Vec<Producto>,
    #[serde(default)]
    pub clientes: Vec<Cliente>,
}

impl Snapshot {
    /// Load the snapshot from the data directory.
    ///
    /// A missing file falls back to the starter data; an unreadable one is
    /// logged and treated the same way.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SNAPSHOT_FILE);
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "snapshot ilegible, se usan datos iniciales");
                    Self::starter()
                }
            },
            Err(_) => Self::starter(),
        }
    }

    /// Built-in rows used until a real snapshot lands in the data directory.
    pub fn starter() -> Self {
        Self {
            ventas: vec![
                Venta {
                    id: 1,
                    fecha: "2026-07-28".to_string(),
                    cliente: "García, Marta".to_string(),
                    producto: "Lavandina Ayudín 1L".to_string(),
                    cantidad: 3,
                    precio: 1250.0,
                },
                Venta {
                    id: 2,
                    fecha: "2026-07-30".to_string(),
                    cliente: "Pérez, Juan".to_string(),
                    producto: "Detergente Magistral 750ml".to_string(),
                    cantidad: 2,
                    precio: 2390.5,
                },
                Venta {
                    id: 3,
                    fecha: "2026-08-02".to_string(),
                    cliente: "Suárez, Ana".to_string(),
                    producto: "Esponja multiuso".to_string(),
                    cantidad: 6,
                    precio: 480.0,
                },
            ],
            productos: vec![
                Producto {
                    id: 1,
                    nombre: "Lavandina Ayudín 1L".to_string(),
                    marca: "Ayudín".to_string(),
                    fecha_alta: "2026-05-12".to_string(),
                },
                Producto {
                    id: 2,
                    nombre: "Detergente Magistral 750ml".to_string(),
                    marca: "Magistral".to_string(),
                    fecha_alta: "2026-05-12".to_string(),
                },
                Producto {
                    id: 3,
                    nombre: "Esponja multiuso".to_string(),
                    marca: "Virulana".to_string(),
                    fecha_alta: "2026-06-03".to_string(),
                },
            ],
            clientes: vec![
                Cliente {
                    id: 1,
                    nombre: "Marta".to_string(),
                    apellido: "García".to_string(),
                    fecha_alta: "2026-04-01".to_string(),
                },
                Cliente {
                    id: 2,
                    nombre: "Juan".to_string(),
                    apellido: "Pérez".to_string(),
                    fecha_alta: "2026-04-15".to_string(),
                },
                Cliente {
                    id: 3,
                    nombre: "Ana".to_string(),
                    apellido: "Suárez".to_string(),
                    fecha_alta: "2026-06-20".to_string(),
                },
            ],
        }
    }

    /// Next free sale id in the local copy.
    pub fn next_venta_id(&self) -> u32 {
        self.ventas.iter().map(|v| v.id).max().unwrap_or(0) + 1
    }

    pub fn remove_venta(&mut self, id: u32) -> bool {
        let before = self.ventas.len();
        self.ventas.retain(|v| v.id != id);
        self.ventas.len() != before
    }

    pub fn remove_producto(&mut self, id: u32) -> bool {
        let before = self.productos.len();
        self.productos.retain(|p| p.id != id);
        self.productos.len() != before
    }

    pub fn remove_cliente(&mut self, id: u32) -> bool {
        let before = self.clientes.len();
        self.clientes.retain(|c| c.id != id);
        self.clientes.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_starter() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::load(dir.path());
        assert_eq!(snapshot, Snapshot::starter());
    }

    #[test]
    fn snapshot_file_wins_over_starter() {
        let dir = tempfile::tempdir().unwrap();
        let custom = Snapshot {
            ventas: vec![],
            productos: vec![],
            clientes: vec![],
        };
        fs::write(
            dir.path().join(SNAPSHOT_FILE),
            serde_json::to_string(&custom).unwrap(),
        )
        .unwrap();
        assert_eq!(Snapshot::load(dir.path()), custom);
    }

    #[test]
    fn corrupt_file_falls_back_to_starter() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SNAPSHOT_FILE), "{").unwrap();
        assert_eq!(Snapshot::load(dir.path()), Snapshot::starter());
    }

    #[test]
    fn remove_reports_whether_a_row_went_away() {
        let mut snapshot = Snapshot::starter();
        assert!(snapshot.remove_venta(1));
        assert!(!snapshot.remove_venta(1));
        assert_eq!(snapshot.ventas.len(), 2);
    }

    #[test]
    fn next_id_follows_the_highest() {
        let mut snapshot = Snapshot::starter();
        assert_eq!(snapshot.next_venta_id(), 4);
        snapshot.ventas.clear();
        assert_eq!(snapshot.next_venta_id(), 1);
    }

    #[test]
    fn venta_total_is_price_times_quantity() {
        let venta = &Snapshot::starter().ventas[0];
        assert_eq!(venta.total(), 3750.0);
    }
}
