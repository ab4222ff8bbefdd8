//! Error types for the panel behavior engine.

use thiserror::Error;

/// Main error type for panel engine operations.
///
/// Most behaviors in this crate tolerate absent targets silently (a missing
/// table or a stored tab with no matching pane is an `Option::None`, not an
/// error). `PanelError` covers the cases where something real failed, such as
/// writing an export file or the persisted UI state.
#[derive(Error, Debug)]
pub enum PanelError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error reading or writing the persisted UI state
    #[error("Storage error: {0}")]
    Storage(String),

    /// Error producing an export artifact
    #[error("Export error: {0}")]
    Export(String),
}

/// Result type alias using PanelError
pub type PanelResult<T> = Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanelError::Storage("estado dañado".to_string());
        assert_eq!(format!("{}", err), "Storage error: estado dañado");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let panel_err: PanelError = io_err.into();
        assert!(matches!(panel_err, PanelError::Io(_)));
    }
}
