//! Schema validation for model-produced assessments.
//!
//! The model's JSON is untrusted input: every required field must be present,
//! the verdict must be one of the three tiers and every score must lie in
//! [0, 100]. Fractional scores are rounded. Experience ids are always
//! reassigned from sequence position.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::{AnalysisResult, Categories, CategoryScore, Experience, Verdict};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("shape mismatch: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: String, value: f64 },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssessment {
    overall_score: f64,
    verdict: Verdict,
    summary: String,
    categories: RawCategories,
    #[serde(default)]
    experiences: Vec<RawExperience>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCategories {
    #[serde(alias = "companies")]
    company_verification: RawCategory,
    #[serde(alias = "artifacts")]
    artifacts_credentials: RawCategory,
    #[serde(alias = "experience")]
    experience_analysis: RawCategory,
    #[serde(alias = "network")]
    network_patterns: RawCategory,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    score: f64,
    explanation: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExperience {
    title: String,
    company: String,
    duration: String,
    score: f64,
    analysis: String,
    #[serde(default)]
    red_flags: Vec<String>,
    #[serde(default)]
    strengths: Vec<String>,
}

fn bounded_score(field: &str, value: f64) -> Result<u8, SchemaError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(SchemaError::OutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(value.round() as u8)
}

fn category(field: &str, raw: RawCategory) -> Result<CategoryScore, SchemaError> {
    Ok(CategoryScore {
        score: bounded_score(field, raw.score)?,
        explanation: raw.explanation,
    })
}

/// Converts an extracted JSON object into a checked `AnalysisResult`.
///
/// `overallScore` and `verdict` are kept as the model reported them; a
/// verdict that disagrees with the score thresholds is only logged.
pub fn validate_assessment(value: Value) -> Result<AnalysisResult, SchemaError> {
    let raw: RawAssessment = serde_json::from_value(value)?;

    let overall_score = bounded_score("overallScore", raw.overall_score)?;
    let expected = Verdict::from_score(overall_score);
    if expected != raw.verdict {
        warn!(
            "Model verdict '{}' disagrees with score {} (thresholds give '{}'); keeping model verdict",
            raw.verdict, overall_score, expected
        );
    }

    let c = raw.categories;
    let categories = Categories {
        company_verification: category(
            "categories.companyVerification.score",
            c.company_verification,
        )?,
        artifacts_credentials: category(
            "categories.artifactsCredentials.score",
            c.artifacts_credentials,
        )?,
        experience_analysis: category(
            "categories.experienceAnalysis.score",
            c.experience_analysis,
        )?,
        network_patterns: category("categories.networkPatterns.score", c.network_patterns)?,
    };

    let experiences = raw
        .experiences
        .into_iter()
        .enumerate()
        .map(|(i, e)| {
            Ok(Experience {
                id: i as u32 + 1,
                score: bounded_score(&format!("experiences[{i}].score"), e.score)?,
                title: e.title,
                company: e.company,
                duration: e.duration,
                analysis: e.analysis,
                red_flags: e.red_flags,
                strengths: e.strengths,
            })
        })
        .collect::<Result<Vec<_>, SchemaError>>()?;

    Ok(AnalysisResult {
        overall_score,
        verdict: raw.verdict,
        summary: raw.summary,
        categories,
        experiences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assessment_json;
    use serde_json::json;

    #[test]
    fn test_valid_assessment() {
        let result = validate_assessment(assessment_json(82, "legitimate")).unwrap();
        assert_eq!(result.overall_score, 82);
        assert_eq!(result.verdict, Verdict::Legitimate);
        assert_eq!(result.categories.company_verification.score, 85);
        assert_eq!(result.experiences.len(), 2);
        assert_eq!(result.experiences[1].red_flags, vec!["Vague responsibilities"]);
    }

    #[test]
    fn test_experience_ids_follow_input_order() {
        let mut value = assessment_json(82, "legitimate");
        value["experiences"][0]["id"] = json!(7);
        let result = validate_assessment(value).unwrap();
        let ids: Vec<u32> = result.experiences.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(result.experiences[0].company, "Globex");
        assert_eq!(result.experiences[1].company, "Initech");
    }

    #[test]
    fn test_model_verdict_kept_when_inconsistent() {
        let result = validate_assessment(assessment_json(40, "legitimate")).unwrap();
        assert_eq!(result.overall_score, 40);
        assert_eq!(result.verdict, Verdict::Legitimate);
    }

    #[test]
    fn test_unknown_verdict_rejected() {
        let err = validate_assessment(assessment_json(82, "probably fine")).unwrap_err();
        assert!(matches!(err, SchemaError::Shape(_)));
    }

    #[test]
    fn test_out_of_range_overall_rejected() {
        let mut value = assessment_json(82, "legitimate");
        value["overallScore"] = json!(140);
        match validate_assessment(value).unwrap_err() {
            SchemaError::OutOfRange { field, value } => {
                assert_eq!(field, "overallScore");
                assert_eq!(value, 140.0);
            }
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn test_negative_experience_score_rejected() {
        let mut value = assessment_json(82, "legitimate");
        value["experiences"][1]["score"] = json!(-5);
        match validate_assessment(value).unwrap_err() {
            SchemaError::OutOfRange { field, .. } => assert_eq!(field, "experiences[1].score"),
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn test_missing_category_rejected() {
        let mut value = assessment_json(82, "legitimate");
        value["categories"]
            .as_object_mut()
            .unwrap()
            .remove("networkPatterns");
        assert!(matches!(
            validate_assessment(value),
            Err(SchemaError::Shape(_))
        ));
    }

    #[test]
    fn test_fractional_scores_rounded() {
        let mut value = assessment_json(82, "legitimate");
        value["overallScore"] = json!(81.6);
        value["categories"]["artifactsCredentials"]["score"] = json!(77.4);
        let result = validate_assessment(value).unwrap();
        assert_eq!(result.overall_score, 82);
        assert_eq!(result.categories.artifacts_credentials.score, 77);
    }

    #[test]
    fn test_flag_lists_default_empty() {
        let mut value = assessment_json(82, "legitimate");
        let first = value["experiences"][0].as_object_mut().unwrap();
        first.remove("redFlags");
        first.remove("strengths");
        let result = validate_assessment(value).unwrap();
        assert!(result.experiences[0].red_flags.is_empty());
        assert!(result.experiences[0].strengths.is_empty());
    }

    #[test]
    fn test_legacy_category_keys_normalized() {
        let value = json!({
            "overallScore": 60,
            "verdict": "questionable",
            "summary": "Mixed signals.",
            "categories": {
                "companies": {"score": 60, "explanation": "a"},
                "artifacts": {"score": 55, "explanation": "b"},
                "experience": {"score": 65, "explanation": "c"},
                "network": {"score": 60, "explanation": "d"}
            },
            "experiences": []
        });
        let result = validate_assessment(value).unwrap();
        assert_eq!(result.categories.artifacts_credentials.score, 55);
        assert!(result.experiences.is_empty());
    }
}
