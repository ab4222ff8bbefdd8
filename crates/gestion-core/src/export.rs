//! Table to CSV export.
//!
//! [`table_to_csv`] is the compatibility-critical transform: every cell is
//! trimmed and double-quoted with embedded quotes doubled, cells join with
//! commas, rows with newlines, and columns flagged as action columns (row
//! controls) are left out entirely. [`write_csv`] packages the text as a
//! downloaded file, defaulting the name to `<table_id>_<YYYY-MM-DD>.csv`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::PanelResult;

/// A table column as it appears on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: String,
    /// Action columns hold row controls and are excluded from exports.
    pub actions: bool,
}

impl Column {
    pub fn data(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            actions: false,
        }
    }

    pub fn actions(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            actions: true,
        }
    }
}

/// A snapshot of a rendered table, ready for export.
///
/// Holds the full row set; live-search filtering never affects what gets
/// exported.
#[derive(Debug, Clone, PartialEq)]
pub struct TableExport {
    pub id: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl TableExport {
    pub fn new(id: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            id: id.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }
}

fn csv_field(text: &str) -> String {
    format!("\"{}\"", text.trim().replace('"', "\"\""))
}

/// Serialize a table to CSV text. Pure; no trailing newline.
pub fn table_to_csv(table: &TableExport) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);

    let header: Vec<String> = table
        .columns
        .iter()
        .filter(|c| !c.actions)
        .map(|c| csv_field(&c.title))
        .collect();
    lines.push(header.join(","));

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&table.columns)
            .filter(|(_, column)| !column.actions)
            .map(|(value, _)| csv_field(value))
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Default export filename: `<table_id>_<YYYY-MM-DD>.csv`.
pub fn default_filename(table_id: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", table_id, date.format("%Y-%m-%d"))
}

/// Write a table's CSV text into `dir`, creating it if needed.
///
/// When no filename is given the default one is synthesized from the table id
/// and today's date.
pub fn write_csv(table: &TableExport, dir: &Path, filename: Option<&str>) -> PanelResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let name = match filename {
        Some(name) => name.to_string(),
        None => default_filename(&table.id, chrono::Utc::now().date_naive()),
    };
    let path = dir.join(name);
    fs::write(&path, table_to_csv(table))?;
    tracing::info!(table = %table.id, path = %path.display(), "tabla exportada");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TableExport {
        let mut table = TableExport::new(
            "tablaVentas",
            vec![
                Column::data("Cliente"),
                Column::data("Producto"),
                Column::actions("Acciones"),
            ],
        );
        table.push_row(vec![
            "García".to_string(),
            "Lavandina".to_string(),
            "Editar".to_string(),
        ]);
        table.push_row(vec![
            " Pérez ".to_string(),
            "Detergente 5\" premium".to_string(),
            "Editar".to_string(),
        ]);
        table
    }

    #[test]
    fn header_plus_one_line_per_row() {
        let csv = table_to_csv(&sample_table());
        assert_eq!(csv.lines().count(), 3);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn cells_are_quoted_trimmed_and_escaped() {
        let csv = table_to_csv(&sample_table());
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("\"Cliente\",\"Producto\""));
        assert_eq!(lines.next(), Some("\"García\",\"Lavandina\""));
        assert_eq!(
            lines.next(),
            Some("\"Pérez\",\"Detergente 5\"\" premium\"")
        );
    }

    #[test]
    fn action_columns_are_excluded() {
        let csv = table_to_csv(&sample_table());
        assert!(!csv.contains("Acciones"));
        assert!(!csv.contains("Editar"));
    }

    #[test]
    fn default_filename_carries_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(
            default_filename("tablaVentas", date),
            "tablaVentas_2026-03-05.csv"
        );
    }

    #[test]
    fn write_csv_uses_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&sample_table(), dir.path(), None).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("tablaVentas_"));
        assert!(name.ends_with(".csv"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, table_to_csv(&sample_table()));
    }

    #[test]
    fn write_csv_honors_explicit_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&sample_table(), dir.path(), Some("ventas.csv")).unwrap();
        assert_eq!(path.file_name().unwrap(), "ventas.csv");
    }
}
