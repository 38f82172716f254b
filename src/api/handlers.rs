//! HTTP request handlers for the Payment Analyzer API.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{analyze_records, calculate_day_payment};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{DayCalculation, parse_record_date};

use super::request::{AnalysisRequest, DayRequest, RulesQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/calculate/day", post(calculate_day_handler))
        .route("/rules", get(rules_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

/// Maps a query string rejection to a 400 response.
fn query_rejection_response(rejection: QueryRejection, correlation_id: Uuid) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string rejected"
    );
    ApiErrorResponse::bad_request(ApiError::new("INVALID_QUERY", body_text)).into_response()
}

/// Logs an engine error and converts it into an error response.
fn engine_error_response(err: AnalyzerError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /analyze.
///
/// Analyses a batch of daily records under either the supplied rule table
/// or the configured, effective-dated ones.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let threshold = config.difference_warning_threshold();

    let analyzed = match &request.rules {
        Some(rules) => rules
            .validate()
            .and_then(|()| analyze_records(&request.records, rules, threshold)),
        None => analyze_records(&request.records, config, threshold),
    };

    let result = match analyzed {
        Ok(result) => result,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        analysis_id = %result.analysis_id,
        records = request.records.len(),
        skipped = result.skipped.len(),
        difference = %result.totals.difference,
        is_valid = result.validation.is_valid,
        "Analysis request completed"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for POST /calculate/day.
async fn calculate_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<DayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing day calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match calculate_day(&state, &request) {
        Ok(day) => json_response(StatusCode::OK, day),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn calculate_day(state: &AppState, request: &DayRequest) -> AnalyzerResult<DayCalculation> {
    let record = &request.record;
    let date = record.parse_date()?;

    let rules = match &request.rules {
        Some(rules) => {
            rules.validate()?;
            rules
        }
        None => state.config().get_rules(date)?,
    };

    calculate_day_payment(
        date,
        record.consignments,
        record.paid_amount,
        record.pickups,
        record.pickup_total,
        rules,
    )
}

/// Handler for GET /rules.
///
/// Returns the rule set in force on the requested date (today by default).
async fn rules_handler(
    State(state): State<AppState>,
    query: Result<Query<RulesQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejection_response(rejection, correlation_id),
    };

    let date = match query.date.as_deref() {
        Some(raw) => match parse_record_date(raw) {
            Ok(date) => date,
            Err(err) => return engine_error_response(err, correlation_id),
        },
        None => Utc::now().date_naive(),
    };

    match state.config().get_rule_set(date) {
        Ok(rule_set) => json_response(StatusCode::OK, rule_set),
        Err(err) => engine_error_response(err, correlation_id),
    }
}
