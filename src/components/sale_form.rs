//! New sale form with auto-calculated total.
//!
//! The total field is recomputed from the raw price and quantity text on
//! every input. Submitting runs the validation gate: violations cancel the
//! submit, and either way the form switches to validated styling.

use std::collections::HashMap;

use dioxus::prelude::*;

use gestion_core::totals::{self, format_total, line_total};
use gestion_core::validation::{FieldError, FieldSpec, FormValidation};
use gestion_core::Severity;
use gestion_ui::{use_alerts, Button, ButtonVariant, Input};

use crate::actions;
use crate::context::use_snapshot;

fn sale_form_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("fecha").required().date(),
        FieldSpec::new("cliente").required(),
        FieldSpec::new("producto").required(),
        FieldSpec::new("cantidad").required().min(1.0),
        FieldSpec::new("precio").required().min(0.01),
    ]
}

#[component]
pub fn SaleForm() -> Element {
    let mut snapshot = use_snapshot();
    let mut alerts = use_alerts();

    let mut fecha = use_signal(String::new);
    let mut cliente = use_signal(String::new);
    let mut producto = use_signal(String::new);
    let mut cantidad = use_signal(String::new);
    let mut precio = use_signal(String::new);

    let mut was_validated = use_signal(|| false);
    let mut errors: Signal<Vec<FieldError>> = use_signal(Vec::new);

    // recomputed from scratch on every input
    let total = format_total(line_total(&precio(), &cantidad()));

    let error_for = move |field: &str| -> Option<String> {
        errors
            .read()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.clone())
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let mut values = HashMap::new();
        values.insert("fecha".to_string(), fecha());
        values.insert("cliente".to_string(), cliente());
        values.insert("producto".to_string(), producto());
        values.insert("cantidad".to_string(), cantidad());
        values.insert("precio".to_string(), precio());

        let mut form = FormValidation::new(sale_form_fields());
        let found = form.validate(&values);
        was_validated.set(form.was_validated());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());

        let cantidad_n = totals::parse_quantity(&cantidad()).max(0) as u32;
        let precio_n = totals::parse_price(&precio());
        actions::register_venta(
            &mut snapshot.write(),
            fecha(),
            cliente(),
            producto(),
            cantidad_n,
            precio_n,
        );
        alerts.push(Severity::Success, "Venta registrada correctamente");

        // back to a pristine form
        fecha.set(String::new());
        cliente.set(String::new());
        producto.set(String::new());
        cantidad.set(String::new());
        precio.set(String::new());
        was_validated.set(false);
    };

    rsx! {
        section { class: "card sale-form",
            h3 { class: "card-title", "Nueva venta" }

            form {
                class: if was_validated() { "needs-validation was-validated" } else { "needs-validation" },
                novalidate: true,
                onsubmit: submit,

                div { class: "form-row",
                    Input {
                        name: "fecha".to_string(),
                        input_type: "date".to_string(),
                        label: "Fecha".to_string(),
                        value: fecha(),
                        oninput: move |v| fecha.set(v),
                        required: true,
                        validated: was_validated(),
                        error: error_for("fecha"),
                    }
                    Input {
                        name: "cliente".to_string(),
                        label: "Cliente".to_string(),
                        placeholder: "Apellido, Nombre".to_string(),
                        value: cliente(),
                        oninput: move |v| cliente.set(v),
                        required: true,
                        validated: was_validated(),
                        error: error_for("cliente"),
                    }
                    Input {
                        name: "producto".to_string(),
                        label: "Producto".to_string(),
                        value: producto(),
                        oninput: move |v| producto.set(v),
                        required: true,
                        validated: was_validated(),
                        error: error_for("producto"),
                    }
                }

                div { class: "form-row",
                    Input {
                        name: "cantidad".to_string(),
                        input_type: "number".to_string(),
                        label: "Cantidad".to_string(),
                        value: cantidad(),
                        oninput: move |v| cantidad.set(v),
                        required: true,
                        validated: was_validated(),
                        error: error_for("cantidad"),
                    }
                    Input {
                        name: "precio".to_string(),
                        input_type: "number".to_string(),
                        label: "Precio unitario".to_string(),
                        value: precio(),
                        oninput: move |v| precio.set(v),
                        required: true,
                        validated: was_validated(),
                        error: error_for("precio"),
                    }
                    Input {
                        name: "total".to_string(),
                        id: "totalVenta".to_string(),
                        label: "Total".to_string(),
                        value: total,
                        oninput: move |_| {},
                        readonly: true,
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    button_type: "submit".to_string(),
                    "Registrar venta"
                }
            }
        }
    }
}
