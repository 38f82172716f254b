//! Aggregated totals over a set of day calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sums of every numeric [`DayCalculation`](super::DayCalculation) field.
///
/// # Example
///
/// ```
/// use payment_analyzer::models::PaymentTotals;
/// use rust_decimal::Decimal;
///
/// let totals = PaymentTotals::default();
/// assert_eq!(totals.expected_total, Decimal::ZERO);
/// assert_eq!(totals.working_days, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTotals {
    /// Total consignments.
    pub consignments: i64,
    /// Total base payment.
    pub base_payment: Decimal,
    /// Total unloading bonus.
    pub unloading_bonus: Decimal,
    /// Total attendance bonus.
    pub attendance_bonus: Decimal,
    /// Total early bonus.
    pub early_bonus: Decimal,
    /// Total of all bonuses.
    pub total_bonus: Decimal,
    /// Total pickups.
    pub pickup_count: i64,
    /// Total pickup pay.
    pub pickup_total: Decimal,
    /// Total expected pay.
    pub expected_total: Decimal,
    /// Total actually paid.
    pub paid_amount: Decimal,
    /// Total difference (paid minus expected).
    pub difference: Decimal,
    /// Number of working days.
    pub working_days: u32,
}
