//! Property tests for the payment calculation core.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use payment_analyzer::calculation::{
    calculate_day_payment, calculate_totals, group_by_weeks, week_start,
};
use payment_analyzer::config::PaymentRules;
use payment_analyzer::models::DayCalculation;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn rules_strategy() -> impl Strategy<Value = PaymentRules> {
    (0_i64..1_000, 0_i64..1_000, 0_i64..10_000, 0_i64..10_000, 0_i64..10_000).prop_map(
        |(weekday, saturday, unloading, attendance, early)| PaymentRules {
            weekday_rate: money(weekday),
            saturday_rate: money(saturday),
            unloading_bonus: money(unloading),
            attendance_bonus: money(attendance),
            early_bonus: money(early),
        },
    )
}

fn day_strategy() -> impl Strategy<Value = DayCalculation> {
    (
        0_i64..730,
        0_i64..60,
        0_i64..50_000,
        0_i64..10,
        0_i64..5_000,
        rules_strategy(),
    )
        .prop_map(|(offset, consignments, paid, pickups, pickup_total, rules)| {
            calculate_day_payment(
                base_date() + Duration::days(offset),
                consignments,
                money(paid),
                pickups,
                money(pickup_total),
                &rules,
            )
            .unwrap()
        })
}

/// Finds the first date on or after 2024-01-01 that falls on `weekday`, plus `weeks` weeks.
fn nth_weekday(weekday: Weekday, weeks: i64) -> NaiveDate {
    let first = (0..7)
        .map(|i| base_date() + Duration::days(i))
        .find(|d| d.weekday() == weekday)
        .unwrap();
    first + Duration::weeks(weeks)
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn expected_total_is_base_plus_bonus_plus_pickups(day in day_strategy()) {
        prop_assert_eq!(day.expected_total, day.base_payment + day.total_bonus + day.pickup_total);
        prop_assert_eq!(
            day.total_bonus,
            day.unloading_bonus + day.attendance_bonus + day.early_bonus
        );
        prop_assert_eq!(day.difference, day.paid_amount - day.expected_total);
    }

    #[test]
    fn monday_never_earns_unloading_bonus(
        weeks in 0_i64..100,
        consignments in 0_i64..60,
        rules in rules_strategy(),
    ) {
        let day = calculate_day_payment(
            nth_weekday(Weekday::Mon, weeks),
            consignments,
            Decimal::ZERO,
            0,
            Decimal::ZERO,
            &rules,
        )
        .unwrap();
        prop_assert_eq!(day.unloading_bonus, Decimal::ZERO);
    }

    #[test]
    fn saturday_never_earns_attendance_or_early_bonus(
        weeks in 0_i64..100,
        consignments in 0_i64..60,
        rules in rules_strategy(),
    ) {
        let day = calculate_day_payment(
            nth_weekday(Weekday::Sat, weeks),
            consignments,
            Decimal::ZERO,
            0,
            Decimal::ZERO,
            &rules,
        )
        .unwrap();
        prop_assert_eq!(day.attendance_bonus, Decimal::ZERO);
        prop_assert_eq!(day.early_bonus, Decimal::ZERO);
        prop_assert_eq!(day.rate, rules.saturday_rate);
    }

    #[test]
    fn idle_sunday_expects_nothing(weeks in 0_i64..100, rules in rules_strategy()) {
        let day = calculate_day_payment(
            nth_weekday(Weekday::Sun, weeks),
            0,
            Decimal::ZERO,
            0,
            Decimal::ZERO,
            &rules,
        )
        .unwrap();
        prop_assert_eq!(day.base_payment, Decimal::ZERO);
        prop_assert_eq!(day.total_bonus, Decimal::ZERO);
        prop_assert_eq!(day.expected_total, Decimal::ZERO);
    }

    #[test]
    fn totals_do_not_depend_on_order(
        (days, shuffled) in prop::collection::vec(day_strategy(), 0..20)
            .prop_flat_map(|days| (Just(days.clone()), Just(days).prop_shuffle())),
    ) {
        let forward = calculate_totals(&days).unwrap();
        let reordered = calculate_totals(&shuffled).unwrap();
        prop_assert_eq!(&forward, &reordered);
        prop_assert_eq!(forward.difference, forward.paid_amount - forward.expected_total);
    }

    #[test]
    fn weekly_groups_partition_the_days(days in prop::collection::vec(day_strategy(), 0..30)) {
        let weeks = group_by_weeks(&days).unwrap();

        let mut grouped: Vec<DayCalculation> =
            weeks.iter().flat_map(|w| w.days.iter().cloned()).collect();
        let mut expected = days.clone();
        grouped.sort_by_key(|d| d.date);
        expected.sort_by_key(|d| d.date);
        prop_assert_eq!(grouped, expected);

        for pair in weeks.windows(2) {
            prop_assert!(pair[0].week_start < pair[1].week_start);
        }
        for week in &weeks {
            prop_assert_eq!(week.week_start.weekday(), Weekday::Mon);
            prop_assert_eq!(week.week_end, week.week_start + Duration::days(6));
            for day in &week.days {
                prop_assert_eq!(week_start(day.date), week.week_start);
            }
        }

        let weekly_expected: Decimal = weeks.iter().map(|w| w.total_expected).sum();
        prop_assert_eq!(weekly_expected, calculate_totals(&days).unwrap().expected_total);
    }
}
