//! Profile analysis pipeline: fixture lookup → preflight → acquisition → assessment.
//!
//! Strictly sequential, one pass, no retries and no caching: submitting the
//! same profile twice runs the assessor twice.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::acquisition::{acquire_content, normalize_url, Acquisition, MANUAL_PASTE_MESSAGE};
use crate::errors::AppError;
use crate::models::{AnalysisResult, AnalyzeRequest, ManualPasteResponse};
use crate::state::AppState;

/// Longest `profileUrl` accepted, in characters.
pub const MAX_PROFILE_URL_CHARS: usize = 2048;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Completed(AnalysisResult),
    /// No profile text could be obtained; the caller should paste it.
    ManualPasteNeeded,
}

impl IntoResponse for AnalysisOutcome {
    fn into_response(self) -> Response {
        match self {
            AnalysisOutcome::Completed(result) => Json(result).into_response(),
            // 200 on purpose: callers check `needsManualPaste`, not the status.
            AnalysisOutcome::ManualPasteNeeded => Json(ManualPasteResponse {
                needs_manual_paste: true,
                error: MANUAL_PASTE_MESSAGE.to_string(),
            })
            .into_response(),
        }
    }
}

pub async fn run_analysis(
    state: &AppState,
    request: &AnalyzeRequest,
) -> Result<AnalysisOutcome, AppError> {
    let pasted = request
        .profile_content
        .as_deref()
        .filter(|c| !c.trim().is_empty());

    if request.profile_url.trim().is_empty() && pasted.is_none() {
        return Err(AppError::Validation(
            "profileUrl or profileContent is required".to_string(),
        ));
    }

    if request.profile_url.chars().count() > MAX_PROFILE_URL_CHARS {
        return Err(AppError::Validation(format!(
            "profileUrl must be at most {MAX_PROFILE_URL_CHARS} characters"
        )));
    }

    if let Some(result) = state.fixtures.lookup(&request.profile_url) {
        info!("Returning fixture analysis for {}", request.profile_url);
        return Ok(AnalysisOutcome::Completed(result.clone()));
    }

    state.assessor.preflight()?;

    let url = normalize_url(&request.profile_url);
    info!("Processing profile: {url}");

    let profile = match acquire_content(&url, pasted, state.scraper.as_deref()).await {
        Acquisition::Acquired(profile) => profile,
        Acquisition::ManualPasteNeeded => return Ok(AnalysisOutcome::ManualPasteNeeded),
    };
    info!(
        "Profile content acquired ({:?}, {} chars)",
        profile.source,
        profile.text.len()
    );

    let result = state.assessor.assess(&url, &profile.text).await?;
    info!(
        "Analysis complete ({}): overall_score={}, verdict={}",
        state.assessor.backend(),
        result.overall_score,
        result.verdict
    );

    Ok(AnalysisOutcome::Completed(result))
}
