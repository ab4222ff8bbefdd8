//! Persisted UI state.
//!
//! A single JSON document in the data directory keeps the small bits of UI
//! state that survive restarts. Today that is exactly one entry: the active
//! tab fragment (`#ventas`, `#productos`, ...), restored when the shell
//! mounts. A missing or corrupt file degrades to defaults; persistence
//! failures are logged and otherwise silent.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::PanelResult;

/// File name of the persisted state inside the data directory.
pub const STATE_FILE: &str = "ui_state.json";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
struct UiState {
    #[serde(default)]
    active_tab: Option<String>,
}

/// Handle to the persisted UI state file.
#[derive(Clone)]
pub struct UiStateStore {
    path: PathBuf,
    state: Arc<RwLock<UiState>>,
}

impl UiStateStore {
    /// Open the store under `data_dir`, loading any existing state.
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let path = data_dir.as_ref().join(STATE_FILE);
        let state = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "estado de UI dañado, se descarta");
                UiState::default()
            }),
            Err(_) => UiState::default(),
        };
        Self {
            path,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// The stored active tab fragment, if any.
    pub fn active_tab(&self) -> Option<String> {
        self.state.read().active_tab.clone()
    }

    /// Record the newly shown tab and persist immediately.
    pub fn set_active_tab(&self, fragment: &str) {
        {
            let mut state = self.state.write();
            if state.active_tab.as_deref() == Some(fragment) {
                return;
            }
            state.active_tab = Some(fragment.to_string());
        }
        if let Err(e) = self.persist() {
            tracing::warn!(path = %self.path.display(), error = %e, "no se pudo guardar el estado de UI");
        }
    }

    fn persist(&self) -> PanelResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&*self.state.read())?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
