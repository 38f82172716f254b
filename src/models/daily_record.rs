//! Daily input record model.
//!
//! This module contains the [`DailyRecord`] type: one day of runsheet data as
//! entered manually or aggregated from an uploaded invoice.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, AnalyzerResult};

/// The date format used on input records.
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest year accepted on a record date.
pub const MIN_RECORD_YEAR: i32 = 1;

/// Latest year accepted on a record date.
pub const MAX_RECORD_YEAR: i32 = 9999;

/// Parses a `YYYY-MM-DD` date string.
///
/// Surrounding whitespace is ignored. chrono accepts signed years of more
/// than four digits; those are rejected so every accepted date has a whole
/// Monday-to-Sunday week around it.
///
/// # Example
///
/// ```
/// use payment_analyzer::models::parse_record_date;
///
/// assert!(parse_record_date("2024-03-06").is_ok());
/// assert!(parse_record_date("06/03/2024").is_err());
/// assert!(parse_record_date("+262142-12-31").is_err());
/// ```
pub fn parse_record_date(raw: &str) -> AnalyzerResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), RECORD_DATE_FORMAT).map_err(|e| {
        AnalyzerError::InvalidDate {
            value: raw.to_string(),
            message: e.to_string(),
        }
    })?;

    if !(MIN_RECORD_YEAR..=MAX_RECORD_YEAR).contains(&date.year()) {
        return Err(AnalyzerError::InvalidDate {
            value: raw.to_string(),
            message: format!(
                "year must be between {} and {}",
                MIN_RECORD_YEAR, MAX_RECORD_YEAR
            ),
        });
    }

    Ok(date)
}

/// One day of driver activity as supplied by the caller.
///
/// Numeric fields that are missing from the input default to zero. Both
/// snake_case and camelCase field names are accepted.
///
/// # Example
///
/// ```
/// use payment_analyzer::models::DailyRecord;
/// use rust_decimal::Decimal;
///
/// let record: DailyRecord = serde_json::from_str(
///     r#"{"date": "2024-03-06", "consignments": 10, "paidAmount": "150.00"}"#,
/// ).unwrap();
///
/// assert_eq!(record.consignments, 10);
/// assert_eq!(record.pickups, 0);
/// assert_eq!(record.pickup_total, Decimal::ZERO);
/// assert!(record.parse_date().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The calendar date, formatted `YYYY-MM-DD`.
    pub date: String,
    /// Number of consignments delivered.
    #[serde(default)]
    pub consignments: i64,
    /// Amount actually paid for the day.
    #[serde(default, alias = "paidAmount")]
    pub paid_amount: Decimal,
    /// Number of pickups collected.
    #[serde(default)]
    pub pickups: i64,
    /// Total paid for pickups, as stated on the invoice.
    #[serde(default, alias = "pickupTotal")]
    pub pickup_total: Decimal,
}

impl DailyRecord {
    /// Parses the record's date string with [`parse_record_date`].
    pub fn parse_date(&self) -> AnalyzerResult<NaiveDate> {
        parse_record_date(&self.date)
    }
}
