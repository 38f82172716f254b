//! Totals aggregation over day calculations.

use rust_decimal::Decimal;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{DayCalculation, PaymentTotals};

/// Sums every numeric field of `days` into a [`PaymentTotals`].
///
/// The result does not depend on the order of `days`. Fails with
/// [`AnalyzerError::Overflow`] if a running sum leaves its type's range.
pub fn calculate_totals(days: &[DayCalculation]) -> AnalyzerResult<PaymentTotals> {
    days.iter().try_fold(PaymentTotals::default(), add_day)
}

fn add_count(total: i64, value: i64, field: &str) -> AnalyzerResult<i64> {
    total
        .checked_add(value)
        .ok_or_else(|| AnalyzerError::overflow(format!("total {}", field)))
}

fn add_amount(total: Decimal, value: Decimal, field: &str) -> AnalyzerResult<Decimal> {
    total
        .checked_add(value)
        .ok_or_else(|| AnalyzerError::overflow(format!("total {}", field)))
}

fn add_day(totals: PaymentTotals, day: &DayCalculation) -> AnalyzerResult<PaymentTotals> {
    let working_days = if day.is_working_day() {
        totals
            .working_days
            .checked_add(1)
            .ok_or_else(|| AnalyzerError::overflow("total working_days"))?
    } else {
        totals.working_days
    };

    Ok(PaymentTotals {
        consignments: add_count(totals.consignments, day.consignments, "consignments")?,
        base_payment: add_amount(totals.base_payment, day.base_payment, "base_payment")?,
        unloading_bonus: add_amount(totals.unloading_bonus, day.unloading_bonus, "unloading_bonus")?,
        attendance_bonus: add_amount(
            totals.attendance_bonus,
            day.attendance_bonus,
            "attendance_bonus",
        )?,
        early_bonus: add_amount(totals.early_bonus, day.early_bonus, "early_bonus")?,
        total_bonus: add_amount(totals.total_bonus, day.total_bonus, "total_bonus")?,
        pickup_count: add_count(totals.pickup_count, day.pickup_count, "pickup_count")?,
        pickup_total: add_amount(totals.pickup_total, day.pickup_total, "pickup_total")?,
        expected_total: add_amount(totals.expected_total, day.expected_total, "expected_total")?,
        paid_amount: add_amount(totals.paid_amount, day.paid_amount, "paid_amount")?,
        difference: add_amount(totals.difference, day.difference, "difference")?,
        working_days,
    })
}

/// Running sum of the absolute value of every field of the days admitted so
/// far.
///
/// Every partial sum over a subset of admitted days, in any order, is
/// bounded by these magnitudes, so totals over any week or over the whole
/// batch cannot overflow once a day has been admitted.
#[derive(Debug, Default)]
pub(crate) struct TotalsHeadroom {
    magnitudes: PaymentTotals,
}

impl TotalsHeadroom {
    /// Admits `day`, or fails without changing the headroom if its
    /// magnitudes would overflow.
    pub(crate) fn admit(&mut self, day: &DayCalculation) -> AnalyzerResult<()> {
        let magnitude = DayCalculation {
            consignments: day
                .consignments
                .checked_abs()
                .ok_or_else(|| AnalyzerError::overflow("batch consignments"))?,
            base_payment: day.base_payment.abs(),
            unloading_bonus: day.unloading_bonus.abs(),
            attendance_bonus: day.attendance_bonus.abs(),
            early_bonus: day.early_bonus.abs(),
            total_bonus: day.total_bonus.abs(),
            pickup_count: day
                .pickup_count
                .checked_abs()
                .ok_or_else(|| AnalyzerError::overflow("batch pickup_count"))?,
            pickup_total: day.pickup_total.abs(),
            expected_total: day.expected_total.abs(),
            paid_amount: day.paid_amount.abs(),
            difference: day.difference.abs(),
            ..day.clone()
        };

        self.magnitudes = add_day(self.magnitudes.clone(), &magnitude)?;
        Ok(())
    }
}
