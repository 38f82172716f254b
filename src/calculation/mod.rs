//! Calculation logic for the Payment Analyzer.
//!
//! This module contains the payment rule engine: day detection, the
//! per-day expected payment calculation, totals, grouping into
//! Monday-to-Sunday weeks, business-rule validation, and the pipeline that
//! analyses a batch of raw daily records. Every function is pure apart
//! from logging.

mod analysis;
mod day_detection;
mod day_payment;
mod totals;
mod validation;
mod weekly_grouping;

pub use analysis::{RuleLookup, analyze_records, calculate_days, summarize_discrepancies};
pub use day_detection::{DayType, day_name, get_day_type, week_end, week_start};
pub use day_payment::calculate_day_payment;
pub use totals::calculate_totals;
pub use validation::{validate_calculations, validate_calculations_with_threshold};
pub use weekly_grouping::group_by_weeks;
