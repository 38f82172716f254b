//! Day payment calculation functionality.
//!
//! This module computes what a driver should have been paid for a single
//! calendar date under a [`PaymentRules`] table, and compares it with what
//! was actually paid.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PaymentRules;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::DayCalculation;

use super::{day_name, get_day_type};

/// Calculates the expected payment for one day.
///
/// The applicable per-consignment rate is the Saturday rate on Saturdays and
/// the weekday rate on every other day (including Sunday, which is expected
/// to carry no consignments). When the day has consignments:
///
/// - `base_payment = consignments × rate`
/// - the unloading bonus is paid on every day except Monday and Sunday
/// - the attendance and early bonuses are paid Monday to Friday
///
/// A day with no consignments earns neither base pay nor bonuses; only its
/// pickup total contributes to the expected total. Out-of-range values such
/// as negative counts flow through and are left to
/// [`validate_calculations`](super::validate_calculations); the only failure
/// is [`AnalyzerError::Overflow`] when an amount exceeds `Decimal`'s range.
///
/// # Arguments
///
/// * `date` - The calendar date
/// * `consignments` - Consignments delivered
/// * `paid_amount` - Amount actually paid
/// * `pickup_count` - Pickups collected
/// * `pickup_total` - Pickup pay as stated by the caller
/// * `rules` - The rate and bonus table
///
/// # Examples
///
/// ```
/// use payment_analyzer::calculation::calculate_day_payment;
/// use payment_analyzer::config::PaymentRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let rules = PaymentRules {
///     weekday_rate: dec("2.00"),
///     saturday_rate: dec("3.00"),
///     unloading_bonus: dec("30"),
///     attendance_bonus: dec("25"),
///     early_bonus: dec("50"),
/// };
///
/// // 2024-03-06 is a Wednesday
/// let date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
/// let day = calculate_day_payment(date, 10, dec("150"), 0, Decimal::ZERO, &rules).unwrap();
///
/// assert_eq!(day.base_payment, dec("20.00"));
/// assert_eq!(day.expected_total, dec("125.00"));
/// assert_eq!(day.difference, dec("25.00"));
/// ```
pub fn calculate_day_payment(
    date: NaiveDate,
    consignments: i64,
    paid_amount: Decimal,
    pickup_count: i64,
    pickup_total: Decimal,
    rules: &PaymentRules,
) -> AnalyzerResult<DayCalculation> {
    let day_type = get_day_type(date);

    let rate = if day_type.uses_saturday_rate() {
        rules.saturday_rate
    } else {
        rules.weekday_rate
    };

    let mut base_payment = Decimal::ZERO;
    let mut unloading_bonus = Decimal::ZERO;
    let mut attendance_bonus = Decimal::ZERO;
    let mut early_bonus = Decimal::ZERO;

    if consignments > 0 {
        base_payment = Decimal::from(consignments)
            .checked_mul(rate)
            .ok_or_else(|| AnalyzerError::overflow("base_payment"))?;

        if day_type.earns_unloading_bonus() {
            unloading_bonus = rules.unloading_bonus;
        }

        if day_type.earns_attendance_bonus() {
            attendance_bonus = rules.attendance_bonus;
            early_bonus = rules.early_bonus;
        }
    }

    let total_bonus = unloading_bonus
        .checked_add(attendance_bonus)
        .and_then(|sum| sum.checked_add(early_bonus))
        .ok_or_else(|| AnalyzerError::overflow("total_bonus"))?;
    let expected_total = base_payment
        .checked_add(total_bonus)
        .and_then(|sum| sum.checked_add(pickup_total))
        .ok_or_else(|| AnalyzerError::overflow("expected_total"))?;
    let difference = paid_amount
        .checked_sub(expected_total)
        .ok_or_else(|| AnalyzerError::overflow("difference"))?;

    debug!(
        date = %date,
        day_type = %day_type,
        consignments,
        rate = %rate,
        expected_total = %expected_total,
        paid_amount = %paid_amount,
        "Calculated day payment"
    );

    Ok(DayCalculation {
        date,
        day_name: day_name(date).to_string(),
        consignments,
        rate,
        base_payment,
        unloading_bonus,
        attendance_bonus,
        early_bonus,
        total_bonus,
        pickup_count,
        pickup_total,
        expected_total,
        paid_amount,
        difference,
    })
}
