//! Modal overlay bookkeeping and cleanup.
//!
//! The shell keeps a single [`OverlayState`] describing the modal layer: live
//! backdrop elements, the body "modal open" marker, the body inline style a
//! modal imposes, and which modals are currently shown. [`OverlayState::cleanup`]
//! forces the whole layer back to its resting state.
//!
//! The cleanup runs from three triggers, all kept deliberately: once when the
//! shell mounts, on a one second repeating sweep for the life of the app, and
//! once shortly after the first render settles.

use std::time::Duration;

/// Period of the repeating cleanup sweep.
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(1);

/// Delay of the one-shot cleanup after the first render.
pub const POST_RENDER_CLEANUP_DELAY: Duration = Duration::from_millis(100);

/// Body overflow mode while the modal layer is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Auto,
    Hidden,
}

/// Body positioning mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Relative,
    Fixed,
}

/// Inline style a modal imposes on the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BodyStyle {
    pub overflow: Overflow,
    /// Scrollbar compensation in pixels.
    pub padding_right_px: u16,
    pub position: Position,
}

/// Bookkeeping for the shell's modal layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlayState {
    backdrops: Vec<String>,
    modal_open: bool,
    body: BodyStyle,
    shown: Vec<String>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a modal as shown: adds its backdrop, locks the body and records
    /// the modal as visible.
    pub fn open_modal(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.backdrops.push(format!("{}-backdrop", id));
        self.shown.push(id);
        self.modal_open = true;
        self.body = BodyStyle {
            overflow: Overflow::Hidden,
            padding_right_px: 15,
            position: Position::Relative,
        };
    }

    /// Normal close path for a single modal. Releases the body once no modal
    /// remains shown.
    pub fn close_modal(&mut self, id: &str) {
        let backdrop = format!("{}-backdrop", id);
        self.backdrops.retain(|b| b != &backdrop);
        self.shown.retain(|m| m != id);
        if self.shown.is_empty() {
            self.modal_open = false;
            self.body = BodyStyle::default();
        }
    }

    /// Force the modal layer back to its resting state.
    ///
    /// Removes every backdrop, clears the body marker, resets the body inline
    /// style and hides any modal still marked visible. Safe to call on an
    /// already-clean state; returns whether anything changed.
    pub fn cleanup(&mut self) -> bool {
        if self.is_clean() {
            return false;
        }
        self.backdrops.clear();
        self.modal_open = false;
        self.body = BodyStyle::default();
        self.shown.clear();
        true
    }

    /// Whether the layer is at its resting state.
    pub fn is_clean(&self) -> bool {
        self.backdrops.is_empty()
            && !self.modal_open
            && self.body == BodyStyle::default()
            && self.shown.is_empty()
    }

    pub fn backdrop_count(&self) -> usize {
        self.backdrops.len()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn body_style(&self) -> BodyStyle {
        self.body
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.shown.iter().any(|m| m == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleanup_on_clean_state_is_noop() {
        let mut state = OverlayState::new();
        assert!(!state.cleanup());
        assert!(state.is_clean());
        assert_eq!(state.body_style(), BodyStyle::default());
    }

    #[test]
    fn cleanup_removes_everything() {
        let mut state = OverlayState::new();
        state.open_modal("editarVenta");
        state.open_modal("editarProducto");
        assert_eq!(state.backdrop_count(), 2);
        assert!(state.modal_open());
        assert!(state.is_shown("editarVenta"));

        assert!(state.cleanup());
        assert!(state.is_clean());
        assert_eq!(state.backdrop_count(), 0);
        assert!(!state.is_shown("editarVenta"));
        assert_eq!(state.body_style().overflow, Overflow::Auto);
        assert_eq!(state.body_style().padding_right_px, 0);
        assert_eq!(state.body_style().position, Position::Relative);
    }

    #[test]
    fn cleanup_is_idempotent() {
        let mut state = OverlayState::new();
        state.open_modal("editarVenta");
        assert!(state.cleanup());
        let after_first = state.clone();
        assert!(!state.cleanup());
        assert_eq!(state, after_first);
    }

    #[test]
    fn close_modal_releases_body_when_last_one_closes() {
        let mut state = OverlayState::new();
        state.open_modal("a");
        state.open_modal("b");
        state.close_modal("a");
        assert!(state.modal_open());
        state.close_modal("b");
        assert!(state.is_clean());
    }
}
