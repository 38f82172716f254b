//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payment rule
//! tables and analyzer settings from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{AnalyzerError, AnalyzerResult};

use super::types::{AnalyzerConfig, AnalyzerFile, AnalyzerMetadata, PaymentRules, RuleSet};

/// Loads and provides access to analyzer configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── analyzer.yaml        # Metadata and validation settings
/// └── rules/
///     └── 2024-01-01.yaml  # Rate table effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use payment_analyzer::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
/// let rules = loader.get_rules(date).unwrap();
/// println!("Weekday rate: {}", rules.weekday_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AnalyzerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if analyzer.yaml or the rules directory is missing, if any file
    /// contains invalid YAML, if no rule files are present, if any rule
    /// table carries a negative rate or bonus, if two rule files share an
    /// effective date, or if the difference threshold is negative.
    pub fn load<P: AsRef<Path>>(path: P) -> AnalyzerResult<Self> {
        let path = path.as_ref();

        let analyzer_path = path.join("analyzer.yaml");
        let analyzer = Self::load_yaml::<AnalyzerFile>(&analyzer_path)?;

        let rules_dir = path.join("rules");
        let rule_sets = Self::load_rule_sets(&rules_dir)?;

        Self::from_parts(analyzer, rule_sets)
    }

    fn from_parts(analyzer: AnalyzerFile, rule_sets: Vec<RuleSet>) -> AnalyzerResult<Self> {
        Ok(Self {
            config: AnalyzerConfig::new(analyzer.metadata, analyzer.validation, rule_sets)?,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AnalyzerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AnalyzerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AnalyzerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every rule file in the rules directory.
    fn load_rule_sets(rules_dir: &Path) -> AnalyzerResult<Vec<RuleSet>> {
        let rules_dir_str = rules_dir.display().to_string();

        if !rules_dir.exists() {
            return Err(AnalyzerError::ConfigNotFound {
                path: rules_dir_str,
            });
        }

        let entries = fs::read_dir(rules_dir).map_err(|_| AnalyzerError::ConfigNotFound {
            path: rules_dir_str.clone(),
        })?;

        let mut rule_sets = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| AnalyzerError::ConfigNotFound {
                path: rules_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                rule_sets.push(Self::load_yaml::<RuleSet>(&path)?);
            }
        }

        if rule_sets.is_empty() {
            return Err(AnalyzerError::ConfigNotFound {
                path: format!("{} (no rule files found)", rules_dir_str),
            });
        }

        Ok(rule_sets)
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &AnalyzerMetadata {
        self.config.metadata()
    }

    /// Returns all loaded rule sets, oldest first.
    pub fn rule_sets(&self) -> &[RuleSet] {
        self.config.rule_sets()
    }

    /// Gets the rule set in force on the given date.
    ///
    /// Returns [`AnalyzerError::RulesNotFound`] when the date precedes every
    /// configured effective date.
    pub fn get_rule_set(&self, date: NaiveDate) -> AnalyzerResult<&RuleSet> {
        self.config
            .rule_set_on(date)
            .ok_or(AnalyzerError::RulesNotFound { date })
    }

    /// Gets the payment rules in force on the given date.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payment_analyzer::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    /// let rules = loader.get_rules(date)?;
    /// println!("Saturday rate: {}", rules.saturday_rate);
    /// # Ok::<(), payment_analyzer::error::AnalyzerError>(())
    /// ```
    pub fn get_rules(&self, date: NaiveDate) -> AnalyzerResult<&PaymentRules> {
        self.get_rule_set(date).map(|rs| &rs.rules)
    }

    /// Returns the configured large-difference warning threshold.
    pub fn difference_warning_threshold(&self) -> Decimal {
        self.config.validation().difference_warning_threshold
    }
}
