//! Configuration types for payment analysis.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, AnalyzerResult};

/// The default size of a paid-vs-expected gap (in currency units) above
/// which a day is flagged as a possible data-entry error.
pub const DEFAULT_DIFFERENCE_WARNING_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// The rate and bonus table a driver is paid under.
///
/// Immutable for the duration of a calculation run.
///
/// # Example
///
/// ```
/// use payment_analyzer::config::PaymentRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = PaymentRules {
///     weekday_rate: Decimal::from_str("2.00").unwrap(),
///     saturday_rate: Decimal::from_str("3.00").unwrap(),
///     unloading_bonus: Decimal::from_str("30.00").unwrap(),
///     attendance_bonus: Decimal::from_str("25.00").unwrap(),
///     early_bonus: Decimal::from_str("50.00").unwrap(),
/// };
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRules {
    /// Amount paid per consignment, Monday to Friday.
    pub weekday_rate: Decimal,
    /// Amount paid per consignment on Saturday.
    pub saturday_rate: Decimal,
    /// Flat bonus paid every working day except Monday and Sunday.
    pub unloading_bonus: Decimal,
    /// Flat bonus paid Monday to Friday.
    pub attendance_bonus: Decimal,
    /// Flat bonus paid Monday to Friday.
    pub early_bonus: Decimal,
}

impl PaymentRules {
    /// Checks that every rate and bonus is non-negative.
    ///
    /// Returns [`AnalyzerError::InvalidRules`] naming the first offending field.
    pub fn validate(&self) -> AnalyzerResult<()> {
        let fields = [
            ("weekday_rate", self.weekday_rate),
            ("saturday_rate", self.saturday_rate),
            ("unloading_bonus", self.unloading_bonus),
            ("attendance_bonus", self.attendance_bonus),
            ("early_bonus", self.early_bonus),
        ];

        for (field, value) in fields {
            if value < Decimal::ZERO {
                return Err(AnalyzerError::InvalidRules {
                    field: field.to_string(),
                    message: format!("must not be negative (got {})", value),
                });
            }
        }

        Ok(())
    }
}

/// A rule table together with the date from which it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// The first date these rules apply to.
    pub effective_date: NaiveDate,
    /// The rate and bonus table.
    pub rules: PaymentRules,
}

/// Validation settings from analyzer.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationSettings {
    /// Absolute paid-vs-expected gap above which a day gets a warning.
    #[serde(default = "default_difference_warning_threshold")]
    pub difference_warning_threshold: Decimal,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            difference_warning_threshold: DEFAULT_DIFFERENCE_WARNING_THRESHOLD,
        }
    }
}

impl ValidationSettings {
    /// Checks that the difference threshold is non-negative.
    pub fn validate(&self) -> AnalyzerResult<()> {
        if self.difference_warning_threshold < Decimal::ZERO {
            return Err(AnalyzerError::InvalidConfig {
                field: "difference_warning_threshold".to_string(),
                message: format!(
                    "must not be negative (got {})",
                    self.difference_warning_threshold
                ),
            });
        }
        Ok(())
    }
}

fn default_difference_warning_threshold() -> Decimal {
    DEFAULT_DIFFERENCE_WARNING_THRESHOLD
}

/// Identifying information for a configuration directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalyzerMetadata {
    /// Human-readable name of the configuration (e.g., the depot or contract).
    pub name: String,
    /// ISO currency code amounts are expressed in.
    pub currency: String,
    /// Version label of the configuration.
    pub version: String,
}

/// Top-level structure of analyzer.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerFile {
    /// Configuration metadata.
    #[serde(flatten)]
    pub metadata: AnalyzerMetadata,
    /// Validation settings.
    #[serde(default)]
    pub validation: ValidationSettings,
}

/// The complete analyzer configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    metadata: AnalyzerMetadata,
    validation: ValidationSettings,
    /// Rule sets by effective date (sorted oldest first).
    rule_sets: Vec<RuleSet>,
}

impl AnalyzerConfig {
    /// Creates a new AnalyzerConfig from its component parts.
    ///
    /// Rejects a negative difference threshold, any invalid rule set, and
    /// two rule sets sharing an effective date.
    pub fn new(
        metadata: AnalyzerMetadata,
        validation: ValidationSettings,
        rule_sets: Vec<RuleSet>,
    ) -> AnalyzerResult<Self> {
        validation.validate()?;
        for rule_set in &rule_sets {
            rule_set.rules.validate()?;
        }

        let mut sorted = rule_sets;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));

        if let Some(pair) = sorted
            .windows(2)
            .find(|pair| pair[0].effective_date == pair[1].effective_date)
        {
            return Err(AnalyzerError::InvalidConfig {
                field: "effective_date".to_string(),
                message: format!(
                    "more than one rule set takes effect on {}",
                    pair[0].effective_date
                ),
            });
        }

        Ok(Self {
            metadata,
            validation,
            rule_sets: sorted,
        })
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &AnalyzerMetadata {
        &self.metadata
    }

    /// Returns the validation settings.
    pub fn validation(&self) -> &ValidationSettings {
        &self.validation
    }

    /// Returns all rule sets, oldest first.
    pub fn rule_sets(&self) -> &[RuleSet] {
        &self.rule_sets
    }

    /// Returns the rule set in force on `date`: the latest one whose
    /// effective date is on or before it.
    pub fn rule_set_on(&self, date: NaiveDate) -> Option<&RuleSet> {
        self.rule_sets
            .iter()
            .rev()
            .find(|rs| rs.effective_date <= date)
    }
}
