//! Color constants for the panel theme.
//!
//! Light administrative palette with contextual accents.

#![allow(dead_code)]

// === SURFACES ===
pub const SURFACE: &str = "#f6f7f9";
pub const SURFACE_CARD: &str = "#ffffff";
pub const BORDER: &str = "#d9dee4";

// === BRAND ===
pub const PRIMARY: &str = "#2458a6";
pub const PRIMARY_DARK: &str = "#1c4584";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#1f2933";
pub const TEXT_SECONDARY: &str = "#52606d";
pub const TEXT_MUTED: &str = "#7b8794";

// === SEMANTIC ===
pub const SUCCESS: &str = "#2e7d4f";
pub const DANGER: &str = "#c62838";
pub const WARNING: &str = "#b97509";
pub const INFO: &str = "#2172ad";
