pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::analysis::handlers as analysis;
use crate::errors::panic_response;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/report", post(report::handle_report))
        .route("/api/v1/report/text", post(report::handle_report_text))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
}
