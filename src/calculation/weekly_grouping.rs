//! Weekly grouping of day calculations.
//!
//! Weeks run Monday to Sunday; Sunday closes the week that started the
//! previous Monday.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::AnalyzerResult;
use crate::models::{DayCalculation, WeekCalculation};

use super::{calculate_totals, week_end, week_start};

/// Groups day calculations into Monday-to-Sunday weeks.
///
/// Weeks are returned in ascending order of their start date, and the days
/// inside each week in ascending date order. Each week's totals are the same
/// reductions [`calculate_totals`] performs, and fail the same way if a
/// week's sums overflow. No day is dropped or duplicated: flattening the
/// result reproduces the input set.
///
/// # Example
///
/// ```
/// use payment_analyzer::calculation::{calculate_day_payment, group_by_weeks};
/// use payment_analyzer::config::PaymentRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = PaymentRules {
///     weekday_rate: Decimal::new(2, 0),
///     saturday_rate: Decimal::new(3, 0),
///     unloading_bonus: Decimal::new(30, 0),
///     attendance_bonus: Decimal::new(25, 0),
///     early_bonus: Decimal::new(50, 0),
/// };
/// let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let days = vec![
///     calculate_day_payment(day(2024, 3, 11), 5, Decimal::ZERO, 0, Decimal::ZERO, &rules).unwrap(),
///     calculate_day_payment(day(2024, 3, 10), 0, Decimal::ZERO, 0, Decimal::ZERO, &rules).unwrap(),
/// ];
///
/// let weeks = group_by_weeks(&days).unwrap();
/// assert_eq!(weeks.len(), 2);
/// assert_eq!(weeks[0].week_start, day(2024, 3, 4));
/// assert_eq!(weeks[1].week_start, day(2024, 3, 11));
/// ```
pub fn group_by_weeks(days: &[DayCalculation]) -> AnalyzerResult<Vec<WeekCalculation>> {
    let mut groups: BTreeMap<NaiveDate, Vec<DayCalculation>> = BTreeMap::new();

    for day in days {
        groups
            .entry(week_start(day.date))
            .or_default()
            .push(day.clone());
    }

    groups
        .into_iter()
        .map(|(start, mut week_days)| {
            week_days.sort_by_key(|d| d.date);
            let totals = calculate_totals(&week_days)?;

            Ok(WeekCalculation {
                week_start: start,
                week_end: week_end(start),
                days: week_days,
                total_expected: totals.expected_total,
                total_actual: totals.paid_amount,
                working_days: totals.working_days,
                total_consignments: totals.consignments,
                total_difference: totals.difference,
            })
        })
        .collect()
}
