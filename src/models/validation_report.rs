//! Validation report model.

use serde::{Deserialize, Serialize};

/// The outcome of checking day calculations against the payment rules.
///
/// Warnings are informational. Any error means the analysis must not be
/// persisted.
///
/// # Example
///
/// ```
/// use payment_analyzer::models::ValidationReport;
///
/// let mut report = ValidationReport::default();
/// assert!(report.is_valid);
///
/// report.add_error("2024-03-04 (Monday): unloading bonus paid");
/// assert!(!report.is_valid);
/// assert_eq!(report.errors.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `true` when no errors were found.
    pub is_valid: bool,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
    /// Findings that block saving the analysis.
    pub errors: Vec<String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            is_valid: true,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl ValidationReport {
    /// Records a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Records an error and marks the report invalid.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }
}
