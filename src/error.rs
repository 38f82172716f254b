//! Error types for the Payment Analyzer.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that can occur while loading rule tables and
//! preparing records for analysis. Arithmetic only fails on overflow;
//! business-rule violations are reported through
//! [`ValidationReport`](crate::models::ValidationReport) instead.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Payment Analyzer.
///
/// # Example
///
/// ```
/// use payment_analyzer::error::AnalyzerError;
///
/// let error = AnalyzerError::ConfigNotFound {
///     path: "/missing/analyzer.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/analyzer.yaml");
/// ```
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was out of range or conflicted with another.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A payment rule table contained an invalid value.
    #[error("Invalid payment rule '{field}': {message}")]
    InvalidRules {
        /// The rule field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No payment rules were in force on the given date.
    #[error("No payment rules in force on {date}")]
    RulesNotFound {
        /// The date for which rules were requested.
        date: NaiveDate,
    },

    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The raw date string.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A calculation exceeded the range of its numeric type.
    #[error("Arithmetic overflow while computing {context}")]
    Overflow {
        /// What was being computed.
        context: String,
    },
}

impl AnalyzerError {
    /// Creates an [`AnalyzerError::Overflow`] for the given computation.
    pub fn overflow(context: impl Into<String>) -> Self {
        AnalyzerError::Overflow {
            context: context.into(),
        }
    }
}

/// A type alias for Results that return AnalyzerError.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = AnalyzerError::ConfigNotFound {
            path: "/missing/analyzer.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/analyzer.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = AnalyzerError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rules_displays_field_and_message() {
        let error = AnalyzerError::InvalidRules {
            field: "weekday_rate".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payment rule 'weekday_rate': must not be negative"
        );
    }

    #[test]
    fn test_rules_not_found_displays_date() {
        let error = AnalyzerError::RulesNotFound {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        assert_eq!(error.to_string(), "No payment rules in force on 2020-01-01");
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = AnalyzerError::InvalidDate {
            value: "2024-13-45".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2024-13-45': input is out of range"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = AnalyzerError::InvalidConfig {
            field: "difference_warning_threshold".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'difference_warning_threshold': must not be negative"
        );
    }

    #[test]
    fn test_overflow_displays_context() {
        let error = AnalyzerError::overflow("expected_total");
        assert_eq!(
            error.to_string(),
            "Arithmetic overflow while computing expected_total"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AnalyzerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_rules_not_found() -> AnalyzerResult<()> {
            Err(AnalyzerError::RulesNotFound {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            })
        }

        fn propagates_error() -> AnalyzerResult<()> {
            returns_rules_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
