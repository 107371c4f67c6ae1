use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

use crate::analysis::validate::validate_assessment;
use crate::errors::AppError;
use crate::models::AnalysisResult;
use crate::report::ReportView;

fn parse_result(payload: Result<Json<Value>, JsonRejection>) -> Result<AnalysisResult, AppError> {
    let Json(value) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    validate_assessment(value).map_err(|e| AppError::Validation(format!("Invalid analysis: {e}")))
}

/// POST /api/v1/report
pub async fn handle_report(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReportView>, AppError> {
    let result = parse_result(payload)?;
    Ok(Json(ReportView::from(&result)))
}

/// POST /api/v1/report/text
pub async fn handle_report_text(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<String, AppError> {
    let result = parse_result(payload)?;
    Ok(ReportView::from(&result).to_string())
}
