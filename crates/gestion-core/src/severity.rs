//! Contextual severity levels shared by alerts and toasts.

use serde::{Deserialize, Serialize};

/// Severity category for transient notifications.
///
/// Drives the contextual styling class of the rendered banner or toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// CSS suffix used by the theme (`alert-info`, `toast-danger`, ...).
    pub fn css_suffix(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_suffixes() {
        assert_eq!(Severity::Info.css_suffix(), "info");
        assert_eq!(Severity::Success.css_suffix(), "success");
        assert_eq!(Severity::Warning.css_suffix(), "warning");
        assert_eq!(Severity::Danger.css_suffix(), "danger");
    }

    #[test]
    fn default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }
}
