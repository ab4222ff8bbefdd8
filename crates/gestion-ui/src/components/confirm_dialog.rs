//! Delete confirmation dialog.
//!
//! Blocking yes/no prompt shown before destructive row actions. Declining
//! closes the dialog and nothing else happens; accepting runs the pending
//! action unmodified. This prompt is deliberately outside the shell's modal
//! layer: it must survive the overlay cleanup sweep.

use dioxus::prelude::*;

/// Fixed message shown before deleting a record.
pub const DELETE_CONFIRM_MESSAGE: &str = "¿Estás seguro de que quieres eliminar este registro?";

/// Blocking confirmation prompt
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ConfirmDialog {
///         show: pending_delete().is_some(),
///         message: DELETE_CONFIRM_MESSAGE.to_string(),
///         on_confirm: move |_| delete_pending(),
///         on_cancel: move |_| pending_delete.set(None),
///     }
/// }
/// ```
#[component]
pub fn ConfirmDialog(
    /// Whether to show the dialog
    show: bool,
    /// Prompt text
    message: String,
    /// Label of the destructive button
    #[props(default = "Eliminar".to_string())]
    confirm_label: String,
    /// Callback when the user accepts
    on_confirm: EventHandler<()>,
    /// Callback when the user declines (or clicks outside)
    on_cancel: EventHandler<()>,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        div {
            class: "confirm-overlay",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "confirm-dialog",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "confirm-title", "Confirmar eliminación" }
                p { class: "confirm-message", "{message}" }

                div { class: "confirm-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
