//! Week grouping model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayCalculation;

/// The day calculations falling in one Monday-to-Sunday week, with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCalculation {
    /// The Monday that starts this week.
    pub week_start: NaiveDate,
    /// The Sunday that ends this week.
    pub week_end: NaiveDate,
    /// The days of this week, sorted by date.
    pub days: Vec<DayCalculation>,
    /// Sum of expected totals.
    pub total_expected: Decimal,
    /// Sum of paid amounts.
    pub total_actual: Decimal,
    /// Number of days with consignments or pickup pay.
    pub working_days: u32,
    /// Sum of consignments.
    pub total_consignments: i64,
    /// Sum of differences.
    pub total_difference: Decimal,
}
