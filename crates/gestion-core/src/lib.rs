//! Gestión Mostrador - headless panel behavior engine.
//!
//! Everything the desktop shell does besides rendering lives here as plain,
//! testable Rust: modal overlay cleanup, flash alerts, toast notifications,
//! live table search, sale totals, CSV export, persisted tab state, the
//! auto-refresh timer, form validation and the es-AR formatting helpers.
//! The crate has no UI dependency; the Dioxus layers bind these behaviors
//! to widgets.

pub mod alert;
pub mod error;
pub mod export;
pub mod format;
pub mod overlay;
pub mod refresh;
pub mod search;
pub mod severity;
pub mod storage;
pub mod toast;
pub mod totals;
pub mod validation;

pub use alert::{Alert, AlertStack, ALERT_AUTO_DISMISS};
pub use error::{PanelError, PanelResult};
pub use export::{default_filename, table_to_csv, write_csv, Column, TableExport};
pub use format::{format_currency, format_date};
pub use overlay::{OverlayState, CLEANUP_INTERVAL, POST_RENDER_CLEANUP_DELAY};
pub use refresh::{RefreshController, REFRESH_INTERVAL};
pub use search::{row_matches, visible_rows};
pub use severity::Severity;
pub use storage::UiStateStore;
pub use toast::{Toast, ToastQueue, TOAST_LIFETIME};
pub use totals::{format_total, line_total};
pub use validation::{Constraint, FieldError, FieldSpec, FormValidation};
