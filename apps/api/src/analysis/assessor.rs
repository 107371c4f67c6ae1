//! Assessors — pluggable backends that turn profile text into an `AnalysisResult`.
//!
//! Default: `LlmAssessor` (one chat-completion call, extraction, validation).
//! Offline: `HeuristicAssessor` (deterministic, URL-derived demo scores).
//!
//! `AppState` holds an `Arc<dyn ProfileAssessor>`, chosen at startup via
//! `ASSESSOR_BACKEND`.

use async_trait::async_trait;
use tracing::info;

use crate::analysis::extract::extract_json_object;
use crate::analysis::prompts::{analysis_prompt, ANALYSIS_SYSTEM};
use crate::analysis::validate::validate_assessment;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::{AnalysisResult, Categories, CategoryScore, Verdict};

#[async_trait]
pub trait ProfileAssessor: Send + Sync {
    /// Fails fast when the backend cannot run at all (e.g. missing credential).
    /// Called before content acquisition.
    fn preflight(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn assess(&self, url: &str, profile_text: &str) -> Result<AnalysisResult, AppError>;

    /// Backend name for logs and `/health`.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAssessor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAssessor(pub LlmClient);

#[async_trait]
impl ProfileAssessor for LlmAssessor {
    fn preflight(&self) -> Result<(), AppError> {
        if self.0.is_configured() {
            Ok(())
        } else {
            Err(AppError::Configuration(
                "LLM_API_KEY not configured".to_string(),
            ))
        }
    }

    async fn assess(&self, _url: &str, profile_text: &str) -> Result<AnalysisResult, AppError> {
        info!("Analyzing profile with AI...");
        let reply = self
            .0
            .complete(&analysis_prompt(profile_text), ANALYSIS_SYSTEM)
            .await?;

        let value =
            extract_json_object(&reply).map_err(|e| AppError::MalformedResponse(e.to_string()))?;
        validate_assessment(value).map_err(|e| AppError::MalformedResponse(e.to_string()))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAssessor
// ────────────────────────────────────────────────────────────────────────────

const COMPANY_EXPLANATION: &str = "Work history shows consistent employment at verified companies with industry-standard progression.";
const ARTIFACTS_EXPLANATION: &str = "Projects, certifications, and publications are verifiable and relevant to claimed expertise.";
const EXPERIENCE_EXPLANATION: &str = "Years of experience align with educational background. Skills match job descriptions realistically.";
const NETWORK_EXPLANATION: &str = "Network size and connections are proportional to career stage. Engagement patterns appear organic.";

/// Deterministic demo scorer. Same URL, same result; no network access.
///
/// Algorithm:
/// 1. h = Σ UTF-16 code units of the URL; base = 50 + h % 40
/// 2. company = base + h%20, experience = base + h%15,
///    artifacts = base − h%10, network = base + h%25 (each capped at 100)
/// 3. overall = rounded mean of the four; verdict from thresholds
pub struct HeuristicAssessor;

/// Sum of the UTF-16 code units, in `u64` so long URLs cannot overflow.
fn url_hash(url: &str) -> u64 {
    url.encode_utf16().map(u64::from).sum()
}

fn summary_for(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Legitimate => "This profile demonstrates strong authenticity markers across all categories. Employment history, skills, and network activity align with genuine professional development.",
        Verdict::Questionable => "This profile shows some inconsistencies that warrant further verification. While not definitively fraudulent, certain aspects require additional scrutiny.",
        Verdict::Suspicious => "Multiple red flags detected. This profile exhibits patterns commonly associated with misleading or fabricated information. Recommend thorough verification before proceeding.",
    }
}

pub fn compute_heuristic_assessment(url: &str) -> AnalysisResult {
    let h = url_hash(url);
    let base = 50 + h % 40;
    let capped = |v: u64| CategoryScore {
        score: v.min(100) as u8,
        explanation: String::new(),
    };

    let categories = Categories {
        company_verification: CategoryScore {
            explanation: COMPANY_EXPLANATION.to_string(),
            ..capped(base + h % 20)
        },
        artifacts_credentials: CategoryScore {
            explanation: ARTIFACTS_EXPLANATION.to_string(),
            ..capped(base - h % 10)
        },
        experience_analysis: CategoryScore {
            explanation: EXPERIENCE_EXPLANATION.to_string(),
            ..capped(base + h % 15)
        },
        network_patterns: CategoryScore {
            explanation: NETWORK_EXPLANATION.to_string(),
            ..capped(base + h % 25)
        },
    };

    let overall_score = categories.mean_score();
    let verdict = Verdict::from_score(overall_score);

    AnalysisResult {
        overall_score,
        verdict,
        summary: summary_for(verdict).to_string(),
        categories,
        experiences: vec![],
    }
}

#[async_trait]
impl ProfileAssessor for HeuristicAssessor {
    async fn assess(&self, url: &str, _profile_text: &str) -> Result<AnalysisResult, AppError> {
        Ok(compute_heuristic_assessment(url))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}
