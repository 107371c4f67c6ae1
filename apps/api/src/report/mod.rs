//! Presentation — turns an `AnalysisResult` into a display model.
//!
//! No judgement happens here: labels and tones come from the score
//! thresholds, and sequences keep the order they were given in.

pub mod handlers;

use std::fmt;

use serde::Serialize;

use crate::models::{AnalysisResult, CategoryKey, Verdict};

/// Colour tone used for scores, badges and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Destructive,
}

impl From<Verdict> for Tone {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Legitimate => Tone::Success,
            Verdict::Questionable => Tone::Warning,
            Verdict::Suspicious => Tone::Destructive,
        }
    }
}

pub fn tone_for(score: u8) -> Tone {
    Verdict::from_score(score).into()
}

/// Per-experience credibility label, independent of the stored verdict.
pub fn credibility_label(score: u8) -> &'static str {
    match Verdict::from_score(score) {
        Verdict::Legitimate => "Highly Credible",
        Verdict::Questionable => "Moderately Credible",
        Verdict::Suspicious => "Low Credibility",
    }
}

fn verdict_heading(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Legitimate => "Legitimate Profile",
        Verdict::Questionable => "Questionable Profile",
        Verdict::Suspicious => "Suspicious Profile",
    }
}

fn category_meta(key: CategoryKey) -> (&'static str, &'static str) {
    match key {
        CategoryKey::CompanyVerification => (
            "Company Verification",
            "Validity of listed companies and roles",
        ),
        CategoryKey::ArtifactsCredentials => (
            "Artifacts & Credentials",
            "Tangible work products and certifications",
        ),
        CategoryKey::ExperienceAnalysis => (
            "Experience Analysis",
            "Career progression and role details",
        ),
        CategoryKey::NetworkPatterns => (
            "Network Patterns",
            "Connection quality for career level",
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Score count-up animation
// ────────────────────────────────────────────────────────────────────────────

pub const TICKER_DELAY_MS: u32 = 300;
pub const TICKER_INTERVAL_MS: u32 = 20;
const TICKER_STEPS: f64 = 30.0;

/// Cosmetic count-up from 0 to the score: start after `delay_ms`, then one
/// frame every `interval_ms`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTicker {
    pub delay_ms: u32,
    pub interval_ms: u32,
    pub frames: Vec<u8>,
}

/// Frames are the floored running total of 30 equal increments; the last
/// frame is always exactly `score`.
pub fn score_ticker(score: u8) -> ScoreTicker {
    let target = f64::from(score);
    let increment = target / TICKER_STEPS;
    let mut frames = Vec::with_capacity(TICKER_STEPS as usize + 1);
    let mut current = 0.0;

    loop {
        current += increment;
        if current >= target {
            frames.push(score);
            break;
        }
        frames.push(current.floor() as u8);
    }

    ScoreTicker {
        delay_ms: TICKER_DELAY_MS,
        interval_ms: TICKER_INTERVAL_MS,
        frames,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// View model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCardView {
    pub score: u8,
    pub score_tone: Tone,
    pub verdict: Verdict,
    pub verdict_tone: Tone,
    pub heading: &'static str,
    pub badge: String,
    pub summary: String,
    pub ticker: ScoreTicker,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCardView {
    pub key: CategoryKey,
    pub title: &'static str,
    pub description: &'static str,
    pub score: u8,
    pub tone: Tone,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceCardView {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub score: u8,
    pub tone: Tone,
    pub credibility: &'static str,
    pub analysis: String,
    pub strengths: Vec<String>,
    pub red_flags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub score_card: ScoreCardView,
    pub experiences: Vec<ExperienceCardView>,
    pub categories: Vec<CategoryCardView>,
}

impl From<&AnalysisResult> for ReportView {
    fn from(result: &AnalysisResult) -> Self {
        let score_card = ScoreCardView {
            score: result.overall_score,
            score_tone: tone_for(result.overall_score),
            verdict: result.verdict,
            verdict_tone: result.verdict.into(),
            heading: verdict_heading(result.verdict),
            badge: result.verdict.as_str().to_uppercase(),
            summary: result.summary.clone(),
            ticker: score_ticker(result.overall_score),
        };

        let experiences = result
            .experiences
            .iter()
            .map(|e| ExperienceCardView {
                id: e.id,
                title: e.title.clone(),
                company: e.company.clone(),
                duration: e.duration.clone(),
                score: e.score,
                tone: tone_for(e.score),
                credibility: credibility_label(e.score),
                analysis: e.analysis.clone(),
                strengths: e.strengths.clone(),
                red_flags: e.red_flags.clone(),
            })
            .collect();

        let categories = result
            .categories
            .iter()
            .map(|(key, c)| {
                let (title, description) = category_meta(key);
                CategoryCardView {
                    key,
                    title,
                    description,
                    score: c.score,
                    tone: tone_for(c.score),
                    explanation: c.explanation.clone(),
                }
            })
            .collect();

        ReportView {
            score_card,
            experiences,
            categories,
        }
    }
}

fn bar(score: u8) -> String {
    let filled = usize::from(score) / 5;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = &self.score_card;
        writeln!(f, "{} [{}]", card.heading, card.badge)?;
        writeln!(f, "Legitimacy Score: {}/100 {}", card.score, bar(card.score))?;
        writeln!(f)?;
        writeln!(f, "{}", card.summary)?;

        if !self.experiences.is_empty() {
            writeln!(f)?;
            writeln!(f, "Experience Analysis")?;
            for e in &self.experiences {
                writeln!(f)?;
                writeln!(f, "#{} {} ({})", e.id, e.title, e.company)?;
                writeln!(f, "   {}", e.duration)?;
                writeln!(f, "   {} {} {}", e.score, bar(e.score), e.credibility)?;
                writeln!(f, "   {}", e.analysis)?;
                for s in &e.strengths {
                    writeln!(f, "   + {s}")?;
                }
                for r in &e.red_flags {
                    writeln!(f, "   ! {r}")?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "Detailed Analysis")?;
        for c in &self.categories {
            writeln!(f)?;
            writeln!(f, "{}: {} {}", c.title, c.score, bar(c.score))?;
            writeln!(f, "   {}", c.description)?;
            writeln!(f, "   {}", c.explanation)?;
        }
        Ok(())
    }
}
