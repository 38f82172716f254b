//! HTTP API module for the Payment Analyzer.
//!
//! This module exposes the payment rule engine over a small JSON API:
//! batch analysis, single-day calculation and rule table lookup.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnalysisRequest, DayRequest, RulesQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
