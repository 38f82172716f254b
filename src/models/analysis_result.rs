//! Analysis result models for the Payment Analyzer.
//!
//! This module contains the [`AnalysisResult`] type and its associated
//! structures that capture every output of analysing a batch of daily
//! records: per-day calculations, weekly groups, totals, validation findings
//! and a summary of underpayments and overpayments.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DayCalculation, PaymentTotals, ValidationReport, WeekCalculation};

/// An input record that could not be analysed.
///
/// # Example
///
/// ```
/// use payment_analyzer::models::SkippedRecord;
///
/// let skipped = SkippedRecord {
///     date: "2024-02-30".to_string(),
///     reason: "Invalid date '2024-02-30': input is out of range".to_string(),
/// };
/// assert_eq!(skipped.date, "2024-02-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// The raw date string of the record.
    pub date: String,
    /// Why the record was skipped.
    pub reason: String,
}

/// How paid amounts compare with expected pay across the analysed days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscrepancySummary {
    /// Days paid less than expected.
    pub underpaid_days: u32,
    /// Days paid more than expected.
    pub overpaid_days: u32,
    /// Days paid exactly as expected.
    pub matched_days: u32,
    /// Total shortfall across underpaid days, as a positive amount.
    pub total_underpaid: Decimal,
    /// Total excess across overpaid days.
    pub total_overpaid: Decimal,
    /// The date with the largest shortfall, if any day was underpaid.
    pub largest_shortfall_date: Option<NaiveDate>,
}

/// The complete result of analysing a batch of daily records.
///
/// # Example
///
/// ```
/// use payment_analyzer::models::{
///     AnalysisResult, DiscrepancySummary, PaymentTotals, ValidationReport,
/// };
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let result = AnalysisResult {
///     analysis_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     days: vec![],
///     weeks: vec![],
///     totals: PaymentTotals::default(),
///     validation: ValidationReport::default(),
///     discrepancies: DiscrepancySummary::default(),
///     skipped: vec![],
///     duration_us: 0,
/// };
/// assert!(result.can_be_saved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Unique identifier for this analysis.
    pub analysis_id: Uuid,
    /// When the analysis was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the analysis.
    pub engine_version: String,
    /// Day calculations, sorted by date.
    pub days: Vec<DayCalculation>,
    /// Day calculations grouped into weeks, sorted by week start.
    pub weeks: Vec<WeekCalculation>,
    /// Totals across every analysed day.
    pub totals: PaymentTotals,
    /// Business-rule findings.
    pub validation: ValidationReport,
    /// Underpayment and overpayment summary.
    pub discrepancies: DiscrepancySummary,
    /// Records that could not be analysed.
    pub skipped: Vec<SkippedRecord>,
    /// The analysis duration in microseconds.
    pub duration_us: u64,
}

impl AnalysisResult {
    /// Returns `true` when validation found no errors.
    pub fn can_be_saved(&self) -> bool {
        self.validation.is_valid
    }
}
