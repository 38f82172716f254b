//! Core data models for the Payment Analyzer.
//!
//! This module contains the input record shape and every derived type the
//! payment rule engine produces.

mod analysis_result;
mod daily_record;
mod day_calculation;
mod payment_totals;
mod validation_report;
mod week_calculation;

pub use analysis_result::{AnalysisResult, DiscrepancySummary, SkippedRecord};
pub use daily_record::{
    DailyRecord, MAX_RECORD_YEAR, MIN_RECORD_YEAR, RECORD_DATE_FORMAT, parse_record_date,
};
pub use day_calculation::DayCalculation;
pub use payment_totals::PaymentTotals;
pub use validation_report::ValidationReport;
pub use week_calculation::WeekCalculation;
