//! Business-rule checks over calculated days.
//!
//! Each check yields either a warning (reported, does not block) or an
//! error (blocks saving the analysis). Nothing here fails or panics.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::DEFAULT_DIFFERENCE_WARNING_THRESHOLD;
use crate::models::{DayCalculation, ValidationReport};

use super::{DayType, get_day_type};

/// Validates day calculations using the default large-difference threshold.
///
/// See [`validate_calculations_with_threshold`].
///
/// # Example
///
/// ```
/// use payment_analyzer::calculation::{calculate_day_payment, validate_calculations};
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
/// // Sunday work is unusual but allowed
/// let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let days = vec![
///     calculate_day_payment(sunday, 5, Decimal::new(10, 0), 0, Decimal::ZERO, &rules).unwrap(),
/// ];
///
/// let report = validate_calculations(&days);
/// assert!(report.is_valid);
/// assert_eq!(report.warnings.len(), 1);
/// ```
pub fn validate_calculations(days: &[DayCalculation]) -> ValidationReport {
    validate_calculations_with_threshold(days, DEFAULT_DIFFERENCE_WARNING_THRESHOLD)
}

/// Validates day calculations against the payment rules.
///
/// Checks, per day:
///
/// - Sunday with consignments or pay: warning
/// - Monday with an unloading bonus: error
/// - Saturday with an attendance or early bonus: error
/// - Negative consignments: error
/// - `|difference| > difference_threshold`: warning
///
/// The weekday is derived from each day's date, not its `day_name`.
pub fn validate_calculations_with_threshold(
    days: &[DayCalculation],
    difference_threshold: Decimal,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for day in days {
        let day_type = get_day_type(day.date);

        match day_type {
            DayType::Sunday => {
                if day.consignments != 0 || !day.paid_amount.is_zero() {
                    report.add_warning(format!(
                        "{} (Sunday): unusual work on a rest day ({} consignments, paid {})",
                        day.date, day.consignments, day.paid_amount
                    ));
                }
            }
            DayType::Monday => {
                if day.unloading_bonus > Decimal::ZERO {
                    report.add_error(format!(
                        "{} (Monday): unloading bonus of {} is never paid on Mondays",
                        day.date, day.unloading_bonus
                    ));
                }
            }
            DayType::Saturday => {
                if !day.attendance_bonus.is_zero() || !day.early_bonus.is_zero() {
                    report.add_error(format!(
                        "{} (Saturday): attendance bonus {} and early bonus {} are never paid on Saturdays",
                        day.date, day.attendance_bonus, day.early_bonus
                    ));
                }
            }
            DayType::Midweek => {}
        }

        if day.consignments < 0 {
            report.add_error(format!(
                "{}: negative consignment count ({})",
                day.date, day.consignments
            ));
        }

        if day.difference.abs() > difference_threshold {
            report.add_warning(format!(
                "{}: difference of {} between paid and expected exceeds {}; check for a data-entry error",
                day.date, day.difference, difference_threshold
            ));
        }
    }

    if !report.is_valid {
        warn!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "Validation found rule violations"
        );
    }

    report
}
