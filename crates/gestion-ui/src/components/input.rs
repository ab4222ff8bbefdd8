//! Form input components.
//!
//! Text/number/date inputs with label, feedback text and validation
//! styling. The valid/invalid classes only appear once the owning form has
//! gone through a submit attempt (`validated`), matching the panel's
//! "validate on submit" flow.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Field name; also derives the default element id (`id_<name>`)
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, number, date, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is read-only (computed fields)
    #[props(default = false)]
    pub readonly: bool,
    /// Explicit element id, overriding the derived one
    #[props(default)]
    pub id: Option<String>,
    /// Whether the owning form already went through a submit attempt
    #[props(default = false)]
    pub validated: bool,
    /// Current violation message for this field, if any
    #[props(default)]
    pub error: Option<String>,
}

/// Labelled form input with validation styling
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         name: "precio",
///         value: precio(),
///         oninput: move |v| precio.set(v),
///         label: "Precio unitario".to_string(),
///         input_type: "number".to_string(),
///         validated: was_validated(),
///         error: error_for("precio"),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("id_{}", props.name));
    let state_class = if props.validated {
        if props.error.is_some() {
            " is-invalid"
        } else {
            " is-valid"
        }
    } else {
        ""
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "form-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                name: "{props.name}",
                class: "form-control{state_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                readonly: props.readonly,
                oninput: move |evt: FormEvent| props.oninput.call(evt.value()),
            }
            if props.validated {
                if let Some(error) = &props.error {
                    div { class: "invalid-feedback", "{error}" }
                }
            }
        }
    }
}
