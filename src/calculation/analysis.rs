//! Record analysis pipeline.
//!
//! Turns raw [`DailyRecord`]s into a complete [`AnalysisResult`]: day
//! calculations, weekly groups, totals, validation and a discrepancy
//! summary. Records that cannot be analysed are skipped and reported rather
//! than failing the batch: a bad date, a date without rules, or amounts
//! large enough to overflow the day or the batch totals.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::{ConfigLoader, PaymentRules};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{
    AnalysisResult, DailyRecord, DayCalculation, DiscrepancySummary, SkippedRecord,
};

use super::totals::TotalsHeadroom;
use super::{
    calculate_day_payment, calculate_totals, group_by_weeks, validate_calculations_with_threshold,
};

/// Source of the payment rules in force on a given date.
pub trait RuleLookup {
    /// Returns the rules that apply to `date`.
    fn rules_on(&self, date: NaiveDate) -> AnalyzerResult<&PaymentRules>;
}

/// A single rule table applies to every date.
impl RuleLookup for PaymentRules {
    fn rules_on(&self, _date: NaiveDate) -> AnalyzerResult<&PaymentRules> {
        Ok(self)
    }
}

/// Rules are looked up by effective date.
impl RuleLookup for ConfigLoader {
    fn rules_on(&self, date: NaiveDate) -> AnalyzerResult<&PaymentRules> {
        self.get_rules(date)
    }
}

/// Calculates every record that can be calculated.
///
/// Returns the day calculations in input order together with the records
/// that were skipped: the date did not parse, no rules were in force on it,
/// or its amounts would overflow either the day or the batch totals. Each
/// skip is logged at `warn` level. The days returned can always be totalled
/// and grouped without overflow.
pub fn calculate_days<R: RuleLookup + ?Sized>(
    records: &[DailyRecord],
    rules: &R,
) -> (Vec<DayCalculation>, Vec<SkippedRecord>) {
    let mut days = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    let mut headroom = TotalsHeadroom::default();

    for record in records {
        match calculate_record(record, rules, &mut headroom) {
            Ok(day) => days.push(day),
            Err(err) => {
                warn!(date = %record.date, error = %err, "Skipping record");
                skipped.push(SkippedRecord {
                    date: record.date.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    (days, skipped)
}

fn calculate_record<R: RuleLookup + ?Sized>(
    record: &DailyRecord,
    rules: &R,
    headroom: &mut TotalsHeadroom,
) -> AnalyzerResult<DayCalculation> {
    let date = record.parse_date()?;
    let day = calculate_day_payment(
        date,
        record.consignments,
        record.paid_amount,
        record.pickups,
        record.pickup_total,
        rules.rules_on(date)?,
    )?;
    headroom.admit(&day)?;
    Ok(day)
}

/// Summarises underpaid, overpaid and matched days.
///
/// Fails with [`AnalyzerError::Overflow`] if the underpaid or overpaid sums
/// leave `Decimal`'s range.
pub fn summarize_discrepancies(days: &[DayCalculation]) -> AnalyzerResult<DiscrepancySummary> {
    let mut summary = DiscrepancySummary::default();
    let mut largest_shortfall = Decimal::ZERO;

    for day in days {
        if day.difference < Decimal::ZERO {
            let shortfall = -day.difference;
            summary.underpaid_days += 1;
            summary.total_underpaid = summary
                .total_underpaid
                .checked_add(shortfall)
                .ok_or_else(|| AnalyzerError::overflow("total_underpaid"))?;
            if shortfall > largest_shortfall {
                largest_shortfall = shortfall;
                summary.largest_shortfall_date = Some(day.date);
            }
        } else if day.difference > Decimal::ZERO {
            summary.overpaid_days += 1;
            summary.total_overpaid = summary
                .total_overpaid
                .checked_add(day.difference)
                .ok_or_else(|| AnalyzerError::overflow("total_overpaid"))?;
        } else {
            summary.matched_days += 1;
        }
    }

    Ok(summary)
}

/// Analyses a batch of daily records.
///
/// Days are sorted by date before grouping and totalling. Validation uses
/// `difference_threshold` for its large-difference warning. Records that
/// cannot be calculated are reported in `skipped`; since [`calculate_days`]
/// only admits days whose sums fit, the aggregation steps do not fail in
/// practice, but their errors are propagated rather than hidden.
///
/// # Example
///
/// ```
/// use payment_analyzer::calculation::analyze_records;
/// use payment_analyzer::config::PaymentRules;
/// use payment_analyzer::models::DailyRecord;
/// use rust_decimal::Decimal;
///
/// let rules = PaymentRules {
///     weekday_rate: Decimal::new(2, 0),
///     saturday_rate: Decimal::new(3, 0),
///     unloading_bonus: Decimal::new(30, 0),
///     attendance_bonus: Decimal::new(25, 0),
///     early_bonus: Decimal::new(50, 0),
/// };
/// let records: Vec<DailyRecord> = serde_json::from_str(r#"[
///     {"date": "2024-03-06", "consignments": 10, "paidAmount": 150},
///     {"date": "not-a-date", "consignments": 3}
/// ]"#).unwrap();
///
/// let result = analyze_records(&records, &rules, Decimal::new(100, 0)).unwrap();
/// assert_eq!(result.days.len(), 1);
/// assert_eq!(result.skipped.len(), 1);
/// assert_eq!(result.totals.difference, Decimal::new(25, 0));
/// ```
pub fn analyze_records<R: RuleLookup + ?Sized>(
    records: &[DailyRecord],
    rules: &R,
    difference_threshold: Decimal,
) -> AnalyzerResult<AnalysisResult> {
    let start_time = Instant::now();

    let (mut days, skipped) = calculate_days(records, rules);
    days.sort_by_key(|d| d.date);

    let weeks = group_by_weeks(&days)?;
    let totals = calculate_totals(&days)?;
    let validation = validate_calculations_with_threshold(&days, difference_threshold);
    let discrepancies = summarize_discrepancies(&days)?;

    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        records = records.len(),
        days = days.len(),
        weeks = weeks.len(),
        skipped = skipped.len(),
        expected_total = %totals.expected_total,
        difference = %totals.difference,
        is_valid = validation.is_valid,
        duration_us,
        "Analysis completed"
    );

    Ok(AnalysisResult {
        analysis_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        days,
        weeks,
        totals,
        validation,
        discrepancies,
        skipped,
        duration_us,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn standard_rules() -> PaymentRules {
        PaymentRules {
            weekday_rate: dec("2.00"),
            saturday_rate: dec("3.00"),
            unloading_bonus: dec("30"),
            attendance_bonus: dec("25"),
            early_bonus: dec("50"),
        }
    }

    fn record(date: &str, consignments: i64, paid: &str) -> DailyRecord {
        DailyRecord {
            date: date.to_string(),
            consignments,
            paid_amount: dec(paid),
            pickups: 0,
            pickup_total: Decimal::ZERO,
        }
    }

    /// Rules only in force from 2024-03-06 onwards.
    struct FromWednesday(PaymentRules);

    impl RuleLookup for FromWednesday {
        fn rules_on(&self, date: NaiveDate) -> AnalyzerResult<&PaymentRules> {
            if date >= make_date("2024-03-06") {
                Ok(&self.0)
            } else {
                Err(AnalyzerError::RulesNotFound { date })
            }
        }
    }

    #[test]
    fn test_calculate_days_skips_unparseable_dates() {
        let records = vec![
            record("2024-03-06", 10, "125"),
            record("2024-02-30", 5, "0"),
            record("", 0, "0"),
        ];

        let (days, skipped) = calculate_days(&records, &standard_rules());
        assert_eq!(days.len(), 1);
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0].date, "2024-02-30");
        assert!(skipped[0].reason.contains("Invalid date"));
    }

    #[test]
    fn test_calculate_days_skips_dates_without_rules() {
        let records = vec![record("2024-03-04", 5, "85"), record("2024-03-06", 10, "125")];

        let (days, skipped) = calculate_days(&records, &FromWednesday(standard_rules()));
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, make_date("2024-03-06"));
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].reason.contains("No payment rules"));
    }

    #[test]
    fn test_analyze_sorts_groups_and_totals() {
        let records = vec![
            record("2024-03-11", 5, "85"),
            record("2024-03-06", 10, "150"),
            record("2024-03-09", 10, "30"),
            record("2024-03-04", 5, "85"),
        ];

        let result = analyze_records(&records, &standard_rules(), dec("100")).unwrap();

        let dates: Vec<NaiveDate> = result.days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2024-03-04"),
                make_date("2024-03-06"),
                make_date("2024-03-09"),
                make_date("2024-03-11"),
            ]
        );
        assert_eq!(result.weeks.len(), 2);
        assert_eq!(result.weeks[0].days.len(), 3);
        assert_eq!(result.totals.expected_total, dec("355.00"));
        assert_eq!(result.totals.paid_amount, dec("350"));
        assert_eq!(result.totals.working_days, 4);
        assert!(result.validation.is_valid);
        assert!(result.can_be_saved());
        assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_discrepancy_summary() {
        let rules = standard_rules();
        let days = vec![
            calculate_day_payment(make_date("2024-03-04"), 5, dec("85"), 0, Decimal::ZERO, &rules)
                .unwrap(),
            calculate_day_payment(make_date("2024-03-06"), 10, dec("150"), 0, Decimal::ZERO, &rules)
                .unwrap(),
            calculate_day_payment(make_date("2024-03-07"), 10, dec("120"), 0, Decimal::ZERO, &rules)
                .unwrap(),
            calculate_day_payment(make_date("2024-03-09"), 10, dec("30"), 0, Decimal::ZERO, &rules)
                .unwrap(),
        ];

        let summary = summarize_discrepancies(&days).unwrap();
        assert_eq!(summary.matched_days, 1);
        assert_eq!(summary.overpaid_days, 1);
        assert_eq!(summary.underpaid_days, 2);
        assert_eq!(summary.total_overpaid, dec("25"));
        assert_eq!(summary.total_underpaid, dec("35"));
        assert_eq!(summary.largest_shortfall_date, Some(make_date("2024-03-09")));
    }

    #[test]
    fn test_empty_batch() {
        let result = analyze_records(&[], &standard_rules(), dec("100")).unwrap();
        assert!(result.days.is_empty());
        assert!(result.weeks.is_empty());
        assert_eq!(result.discrepancies, DiscrepancySummary::default());
        assert!(result.validation.is_valid);
    }

    #[test]
    fn test_dates_at_calendar_limits_are_skipped() {
        let records = vec![
            record("+262142-12-31", 1, "0"),
            record("-262143-01-01", 1, "0"),
            record("2024-03-06", 10, "125"),
        ];

        let result = analyze_records(&records, &standard_rules(), dec("100")).unwrap();
        assert_eq!(result.days.len(), 1);
        assert_eq!(result.skipped.len(), 2);
        assert!(result.skipped[0].reason.contains("year must be between"));
    }

    #[test]
    fn test_overflowing_amount_is_skipped() {
        let mut huge = record("2024-03-06", 10, "0");
        huge.pickup_total = Decimal::MAX;
        let records = vec![huge, record("2024-03-07", 10, "125")];

        let result = analyze_records(&records, &standard_rules(), dec("100")).unwrap();
        assert_eq!(result.days.len(), 1);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].date, "2024-03-06");
        assert!(result.skipped[0].reason.contains("overflow"));
        assert_eq!(result.totals.expected_total, dec("125.00"));
    }

    #[test]
    fn test_record_that_would_overflow_count_totals_is_skipped() {
        let mut first = record("2024-03-05", 0, "0");
        first.consignments = i64::MAX;
        let second = first.clone();

        let result = analyze_records(&[first, second], &standard_rules(), dec("100")).unwrap();

        assert_eq!(result.days.len(), 1);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.totals.consignments, i64::MAX);
        assert_eq!(result.weeks.len(), 1);
    }

    #[test]
    fn test_record_that_would_overflow_amount_totals_is_skipped() {
        let mut overpaid = record("2024-03-10", 0, "0");
        overpaid.paid_amount = Decimal::MAX;
        let mut underpaid = record("2024-03-17", 0, "0");
        underpaid.paid_amount = Decimal::MIN;

        let result = analyze_records(
            &[overpaid.clone(), overpaid, underpaid],
            &standard_rules(),
            dec("100"),
        )
        .unwrap();

        assert_eq!(result.days.len(), 1);
        assert_eq!(result.skipped.len(), 2);
        assert_eq!(result.totals.paid_amount, Decimal::MAX);
        assert_eq!(result.discrepancies.total_overpaid, Decimal::MAX);
    }

    #[test]
    fn test_summary_overflow_is_error() {
        let rules = standard_rules();
        let day = calculate_day_payment(
            make_date("2024-03-10"),
            0,
            Decimal::MAX,
            0,
            Decimal::ZERO,
            &rules,
        )
        .unwrap();

        assert!(matches!(
            summarize_discrepancies(&[day.clone(), day]),
            Err(AnalyzerError::Overflow { .. })
        ));
    }
}
