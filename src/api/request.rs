//! Request types for the Payment Analyzer API.

use serde::{Deserialize, Serialize};

use crate::config::PaymentRules;
use crate::models::DailyRecord;

/// Request body for the `/analyze` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The daily records to analyse.
    pub records: Vec<DailyRecord>,
    /// Rule table to apply to every record instead of the configured,
    /// effective-dated tables.
    #[serde(default)]
    pub rules: Option<PaymentRules>,
}

/// Request body for the `/calculate/day` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRequest {
    /// The day to calculate.
    #[serde(flatten)]
    pub record: DailyRecord,
    /// Rule table to apply instead of the configured one.
    #[serde(default)]
    pub rules: Option<PaymentRules>,
}

/// Query parameters for the `/rules` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesQuery {
    /// The date to look up, formatted `YYYY-MM-DD`. Defaults to today.
    #[serde(default)]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_analysis_request_without_rules() {
        let json = r#"{
            "records": [
                {"date": "2024-03-06", "consignments": 10, "paid_amount": "150.00"},
                {"date": "2024-03-09", "consignments": 10, "paidAmount": 30}
            ]
        }"#;

        let request: AnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records.len(), 2);
        assert!(request.rules.is_none());
    }

    #[test]
    fn test_deserialize_analysis_request_with_rules() {
        let json = r#"{
            "records": [],
            "rules": {
                "weekday_rate": "2.50",
                "saturday_rate": "3.50",
                "unloading_bonus": "30",
                "attendance_bonus": "25",
                "early_bonus": "50"
            }
        }"#;

        let request: AnalysisRequest = serde_json::from_str(json).unwrap();
        let rules = request.rules.unwrap();
        assert_eq!(rules.weekday_rate, Decimal::from_str("2.50").unwrap());
    }

    #[test]
    fn test_deserialize_day_request_flattens_record() {
        let json = r#"{
            "date": "2024-03-04",
            "consignments": 5,
            "pickups": 1,
            "pickupTotal": "2.00"
        }"#;

        let request: DayRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.record.date, "2024-03-04");
        assert_eq!(request.record.consignments, 5);
        assert_eq!(request.record.pickup_total, Decimal::from_str("2.00").unwrap());
        assert!(request.rules.is_none());
    }
}
