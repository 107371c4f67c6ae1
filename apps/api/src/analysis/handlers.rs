//! Axum route handlers for the Analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::Instrument;
use uuid::Uuid;

use crate::analysis::pipeline::{run_analysis, AnalysisOutcome};
use crate::errors::AppError;
use crate::models::AnalyzeRequest;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Returns an `AnalysisResult`, or `{needsManualPaste: true, error}` with
/// HTTP 200 when profile text could not be obtained.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<AnalysisOutcome, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let span = tracing::info_span!("analysis", id = %Uuid::new_v4());
    run_analysis(&state, &request).instrument(span).await
}
