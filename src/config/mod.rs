//! Configuration loading and management for the Payment Analyzer.
//!
//! This module loads the effective-dated payment rule tables and the
//! analyzer's validation settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payment_analyzer::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded configuration: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnalyzerConfig, AnalyzerFile, AnalyzerMetadata, DEFAULT_DIFFERENCE_WARNING_THRESHOLD,
    PaymentRules, RuleSet, ValidationSettings,
};
