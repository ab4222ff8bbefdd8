//! Gestión Mostrador UI components
//!
//! Reusable Dioxus widgets for the admin panel: buttons, form inputs, the
//! searchable data table, the delete-confirmation dialog, flash alerts and
//! toast notifications. Widgets stay behavior-thin; the rules they follow
//! (search matching, toast lifetimes, validation) live in `gestion-core`.

pub mod components;

pub use components::*;
