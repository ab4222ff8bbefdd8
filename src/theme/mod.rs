//! Panel theme: color constants and global styles.

pub mod colors;
pub mod styles;

pub use styles::GLOBAL_STYLES;
