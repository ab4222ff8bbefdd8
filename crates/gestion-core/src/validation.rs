//! Form validation gate.
//!
//! Mirrors the browser's constraint-validation flow for the subset the panel
//! forms use: a form declares per-field constraints, a submit attempt checks
//! them all, and the form is marked as validated regardless of the outcome so
//! the valid/invalid styling becomes visible. An invalid submit goes no
//! further than the check.

use std::collections::HashMap;

use chrono::NaiveDate;

/// A single field constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Value must be non-blank.
    Required,
    /// Value must parse as a number no smaller than the minimum.
    Min(f64),
    /// Value must be a `YYYY-MM-DD` date.
    Date,
}

/// Declared constraints for one named field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub constraints: Vec<Constraint>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.constraints.push(Constraint::Required);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.constraints.push(Constraint::Min(min));
        self
    }

    pub fn date(mut self) -> Self {
        self.constraints.push(Constraint::Date);
        self
    }
}

/// A constraint violation, with the message shown as field feedback.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validation state of one form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValidation {
    fields: Vec<FieldSpec>,
    was_validated: bool,
}

impl FormValidation {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            was_validated: false,
        }
    }

    /// Run a submit attempt. Marks the form as validated either way and
    /// returns the violations; an empty list means the submit may proceed.
    pub fn validate(&mut self, values: &HashMap<String, String>) -> Vec<FieldError> {
        self.was_validated = true;
        let mut errors = Vec::new();
        for field in &self.fields {
            let value = values.get(&field.name).map(String::as_str).unwrap_or("");
            if let Some(message) = violation(field, value) {
                errors.push(FieldError {
                    field: field.name.clone(),
                    message,
                });
            }
        }
        errors
    }

    /// Whether a submit attempt already happened (controls validation styling).
    pub fn was_validated(&self) -> bool {
        self.was_validated
    }
}

fn violation(field: &FieldSpec, value: &str) -> Option<String> {
    let value = value.trim();
    for constraint in &field.constraints {
        match constraint {
            Constraint::Required => {
                if value.is_empty() {
                    return Some("Este campo es obligatorio".to_string());
                }
            }
            Constraint::Min(min) => {
                if value.is_empty() {
                    continue; // blank is Required's business
                }
                match value.parse::<f64>() {
                    Ok(n) if n >= *min => {}
                    Ok(_) => return Some(format!("Debe ser al menos {}", min)),
                    Err(_) => return Some("Debe ser un número válido".to_string()),
                }
            }
            Constraint::Date => {
                if value.is_empty() {
                    continue;
                }
                if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                    return Some("Fecha inválida".to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn sale_form() -> FormValidation {
        FormValidation::new(vec![
            FieldSpec::new("fecha").required().date(),
            FieldSpec::new("cliente").required(),
            FieldSpec::new("cantidad").required().min(1.0),
            FieldSpec::new("precio").required().min(0.01),
        ])
    }

    #[test]
    fn valid_submit_has_no_errors() {
        let mut form = sale_form();
        let errors = form.validate(&values(&[
            ("fecha", "2026-03-05"),
            ("cliente", "García"),
            ("cantidad", "3"),
            ("precio", "150.50"),
        ]));
        assert!(errors.is_empty());
        assert!(form.was_validated());
    }

    #[test]
    fn invalid_submit_is_marked_validated_anyway() {
        let mut form = sale_form();
        let errors = form.validate(&values(&[]));
        assert!(!errors.is_empty());
        assert!(form.was_validated());
    }

    #[test]
    fn missing_field_counts_as_blank() {
        let mut form = FormValidation::new(vec![FieldSpec::new("cliente").required()]);
        let errors = form.validate(&values(&[("otro", "x")]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "cliente");
    }

    #[test]
    fn min_rejects_below_and_non_numeric() {
        let mut form = FormValidation::new(vec![FieldSpec::new("cantidad").required().min(1.0)]);
        assert_eq!(
            form.validate(&values(&[("cantidad", "0")]))[0].message,
            "Debe ser al menos 1"
        );
        assert_eq!(
            form.validate(&values(&[("cantidad", "tres")]))[0].message,
            "Debe ser un número válido"
        );
        assert!(form.validate(&values(&[("cantidad", "2")])).is_empty());
    }

    #[test]
    fn date_must_be_well_formed() {
        let mut form = FormValidation::new(vec![FieldSpec::new("fecha").required().date()]);
        assert_eq!(
            form.validate(&values(&[("fecha", "05/03/2026")]))[0].message,
            "Fecha inválida"
        );
        assert!(form.validate(&values(&[("fecha", "2026-03-05")])).is_empty());
    }
}
