use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// Full credibility assessment returned by `POST /api/v1/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u8, // 0 – 100
    pub verdict: Verdict,
    pub summary: String,
    pub categories: Categories,
    pub experiences: Vec<Experience>,
}

/// Score and narrative for one evaluation dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u8,
    pub explanation: String,
}

/// The four fixed evaluation dimensions.
///
/// Older payloads used short keys (`companies`, `artifacts`, ...); those are
/// accepted on input, output always uses the long names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categories {
    #[serde(alias = "companies")]
    pub company_verification: CategoryScore,
    #[serde(alias = "artifacts")]
    pub artifacts_credentials: CategoryScore,
    #[serde(alias = "experience")]
    pub experience_analysis: CategoryScore,
    #[serde(alias = "network")]
    pub network_patterns: CategoryScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKey {
    CompanyVerification,
    ArtifactsCredentials,
    ExperienceAnalysis,
    NetworkPatterns,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 4] = [
        CategoryKey::CompanyVerification,
        CategoryKey::ArtifactsCredentials,
        CategoryKey::ExperienceAnalysis,
        CategoryKey::NetworkPatterns,
    ];
}

impl Categories {
    pub fn get(&self, key: CategoryKey) -> &CategoryScore {
        match key {
            CategoryKey::CompanyVerification => &self.company_verification,
            CategoryKey::ArtifactsCredentials => &self.artifacts_credentials,
            CategoryKey::ExperienceAnalysis => &self.experience_analysis,
            CategoryKey::NetworkPatterns => &self.network_patterns,
        }
    }

    /// Categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryKey, &CategoryScore)> {
        CategoryKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// Rounded mean of the four category scores (half rounds up).
    pub fn mean_score(&self) -> u8 {
        let sum: u32 = self.iter().map(|(_, c)| u32::from(c.score)).sum();
        ((sum + 2) / 4) as u8
    }
}

/// Assessment of a single employment entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// 1-based position in the profile's experience list.
    pub id: u32,
    pub title: String,
    pub company: String,
    /// Free text as it appears on the profile, e.g. "Mar 2015 - Jun 2016 · 1 yr 4 mos".
    pub duration: String,
    pub score: u8,
    pub analysis: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response envelopes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub profile_url: String,
    #[serde(default)]
    pub profile_content: Option<String>,
}

/// Returned with HTTP 200 when no profile text could be obtained.
/// Callers must check `needsManualPaste` rather than the status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualPasteResponse {
    pub needs_manual_paste: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category(score: u8) -> CategoryScore {
        CategoryScore {
            score,
            explanation: "x".to_string(),
        }
    }

    #[test]
    fn test_categories_accept_legacy_keys() {
        let value = json!({
            "companies": {"score": 80, "explanation": "a"},
            "artifacts": {"score": 70, "explanation": "b"},
            "experience": {"score": 60, "explanation": "c"},
            "network": {"score": 50, "explanation": "d"}
        });
        let categories: Categories = serde_json::from_value(value).unwrap();
        assert_eq!(categories.company_verification.score, 80);
        assert_eq!(categories.network_patterns.score, 50);

        let out = serde_json::to_value(&categories).unwrap();
        assert!(out.get("companyVerification").is_some());
        assert!(out.get("companies").is_none());
    }

    #[test]
    fn test_mean_score_rounds_half_up() {
        let categories = Categories {
            company_verification: category(80),
            artifacts_credentials: category(71),
            experience_analysis: category(70),
            network_patterns: category(69),
        };
        // 290 / 4 = 72.5
        assert_eq!(categories.mean_score(), 73);
    }

    #[test]
    fn test_iter_is_display_order() {
        let categories = Categories {
            company_verification: category(1),
            artifacts_credentials: category(2),
            experience_analysis: category(3),
            network_patterns: category(4),
        };
        let scores: Vec<u8> = categories.iter().map(|(_, c)| c.score).collect();
        assert_eq!(scores, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_manual_paste_response_shape() {
        let body = serde_json::to_value(ManualPasteResponse {
            needs_manual_paste: true,
            error: "paste it".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({"needsManualPaste": true, "error": "paste it"}));
    }

    #[test]
    fn test_analyze_request_content_optional() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"profileUrl": "linkedin.com/in/someone"}"#).unwrap();
        assert_eq!(req.profile_url, "linkedin.com/in/someone");
        assert!(req.profile_content.is_none());
    }
}
