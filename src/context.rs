//! Shared panel context and hooks.
//!
//! The App component provides the shared state; these hooks give pages and
//! widgets typed access to it.

use std::path::PathBuf;

use dioxus::prelude::*;

use gestion_core::{OverlayState, RefreshController, UiStateStore};

use crate::records::Snapshot;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the persisted UI state store.
pub fn use_ui_store() -> UiStateStore {
    use_context::<UiStateStore>()
}

/// Hook to access the local data snapshot.
pub fn use_snapshot() -> Signal<Snapshot> {
    use_context::<Signal<Snapshot>>()
}

/// Hook to access the modal overlay state.
pub fn use_overlay() -> Signal<OverlayState> {
    use_context::<Signal<OverlayState>>()
}

/// Hook to access the auto-refresh controller.
pub fn use_refresh() -> Signal<RefreshController> {
    use_context::<Signal<RefreshController>>()
}
