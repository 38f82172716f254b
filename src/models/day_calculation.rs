//! Day calculation model.
//!
//! This module contains the [`DayCalculation`] type: the expected pay for a
//! single calendar date compared with what was actually paid.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The expected-vs-paid breakdown for one calendar date.
///
/// `expected_total` always equals `base_payment + total_bonus + pickup_total`,
/// and `difference` is `paid_amount - expected_total` (positive means the
/// driver was overpaid, negative means underpaid).
///
/// # Example
///
/// ```
/// use payment_analyzer::models::DayCalculation;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let day = DayCalculation {
///     date: NaiveDate::from_ymd_opt(2024, 3, 6).unwrap(),
///     day_name: "Wednesday".to_string(),
///     consignments: 10,
///     rate: dec("2.00"),
///     base_payment: dec("20.00"),
///     unloading_bonus: dec("30.00"),
///     attendance_bonus: dec("25.00"),
///     early_bonus: dec("50.00"),
///     total_bonus: dec("105.00"),
///     pickup_count: 0,
///     pickup_total: Decimal::ZERO,
///     expected_total: dec("125.00"),
///     paid_amount: dec("150.00"),
///     difference: dec("25.00"),
/// };
/// assert!(day.is_working_day());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCalculation {
    /// The calendar date.
    pub date: NaiveDate,
    /// English weekday name (e.g., "Monday").
    pub day_name: String,
    /// Number of consignments delivered.
    pub consignments: i64,
    /// Per-consignment rate applied to this day.
    pub rate: Decimal,
    /// `consignments × rate`.
    pub base_payment: Decimal,
    /// Unloading bonus earned.
    pub unloading_bonus: Decimal,
    /// Attendance bonus earned.
    pub attendance_bonus: Decimal,
    /// Early bonus earned.
    pub early_bonus: Decimal,
    /// Sum of the three bonuses.
    pub total_bonus: Decimal,
    /// Number of pickups collected.
    pub pickup_count: i64,
    /// Pickup pay, as supplied by the caller.
    pub pickup_total: Decimal,
    /// What the driver should have been paid.
    pub expected_total: Decimal,
    /// What the driver was actually paid.
    pub paid_amount: Decimal,
    /// `paid_amount - expected_total`.
    pub difference: Decimal,
}

impl DayCalculation {
    /// A working day has consignments or pickup pay.
    pub fn is_working_day(&self) -> bool {
        self.consignments > 0 || self.pickup_total > Decimal::ZERO
    }
}
