//! Day detection logic.
//!
//! This module classifies calendar dates into the day types the payment
//! rules distinguish, and locates the Monday that starts a date's week.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The kind of day as far as the payment rules are concerned.
///
/// Monday is separated from the rest of the working week because it never
/// carries an unloading bonus.
///
/// # Example
///
/// ```
/// use payment_analyzer::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2024-03-09 is a Saturday
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(get_day_type(date), DayType::Saturday);
/// assert!(!DayType::Saturday.earns_attendance_bonus());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday: weekday rate, attendance and early bonus, no unloading bonus.
    Monday,
    /// Tuesday to Friday: weekday rate and every bonus.
    Midweek,
    /// Saturday: Saturday rate and unloading bonus only.
    Saturday,
    /// Sunday: rest day, weekday rate and no bonuses.
    Sunday,
}

impl DayType {
    /// Whether consignments on this day are paid at the Saturday rate.
    pub fn uses_saturday_rate(self) -> bool {
        self == DayType::Saturday
    }

    /// Whether this day earns the unloading bonus.
    pub fn earns_unloading_bonus(self) -> bool {
        matches!(self, DayType::Midweek | DayType::Saturday)
    }

    /// Whether this day earns the attendance and early bonuses.
    pub fn earns_attendance_bonus(self) -> bool {
        matches!(self, DayType::Monday | DayType::Midweek)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Monday => write!(f, "Monday"),
            DayType::Midweek => write!(f, "Midweek"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Mon => DayType::Monday,
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Midweek,
    }
}

/// Returns the English name of the date's weekday.
///
/// # Example
///
/// ```
/// use payment_analyzer::calculation::day_name;
/// use chrono::NaiveDate;
///
/// assert_eq!(day_name(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()), "Wednesday");
/// ```
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Returns the Monday of the ISO week containing `date`.
///
/// Sunday belongs to the week that started the previous Monday. In the
/// partial week at the start of chrono's calendar the result clamps to
/// [`NaiveDate::MIN`].
///
/// # Example
///
/// ```
/// use payment_analyzer::calculation::week_start;
/// use chrono::NaiveDate;
///
/// // Sunday 2024-03-10 belongs to the week of Monday 2024-03-04
/// let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_since_monday = date.weekday().num_days_from_monday();
    date.checked_sub_days(Days::new(u64::from(days_since_monday)))
        .unwrap_or(NaiveDate::MIN)
}

/// Returns the Sunday closing the week that starts on `start`.
///
/// Clamps to [`NaiveDate::MAX`] at the end of chrono's calendar.
pub fn week_end(start: NaiveDate) -> NaiveDate {
    start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX)
}
