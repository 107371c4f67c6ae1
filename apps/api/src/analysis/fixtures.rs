//! Fixture overrides — canned results for demo profiles, keyed by URL substring.
//!
//! Consulted before acquisition and before any assessor runs. Kept apart
//! from the production pipeline: a fixture hit returns immediately.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::analysis::validate::validate_assessment;
use crate::models::AnalysisResult;

const BUILTIN_FIXTURES: &str = include_str!("../../fixtures/demo_profiles.json");

#[derive(Debug, Deserialize)]
struct RawFixture {
    #[serde(rename = "match")]
    pattern: String,
    result: Value,
}

#[derive(Debug, Clone)]
pub struct Fixture {
    /// Lower-cased URL substring.
    pub pattern: String,
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureTable {
    entries: Vec<Fixture>,
}

impl FixtureTable {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_FIXTURES).context("Built-in fixture table is invalid")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixtures file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid fixtures file {}", path.display()))
    }

    /// Parses `[{"match": "<url substring>", "result": <AnalysisResult>}, ...]`.
    /// Every result goes through the same validation as model output.
    pub fn from_json(raw: &str) -> Result<Self> {
        let fixtures: Vec<RawFixture> = serde_json::from_str(raw)?;
        let mut entries = Vec::with_capacity(fixtures.len());
        for (i, f) in fixtures.into_iter().enumerate() {
            let pattern = f.pattern.trim().to_lowercase();
            if pattern.is_empty() {
                bail!("fixture {i} has an empty match pattern");
            }
            let result =
                validate_assessment(f.result).with_context(|| format!("fixture {i} ({pattern})"))?;
            entries.push(Fixture { pattern, result });
        }
        Ok(Self { entries })
    }

    pub fn extend(&mut self, other: FixtureTable) {
        self.entries.extend(other.entries);
    }

    /// First fixture whose pattern occurs in `url` (case-insensitive).
    pub fn lookup(&self, url: &str) -> Option<&AnalysisResult> {
        let url = url.to_lowercase();
        self.entries
            .iter()
            .find(|f| url.contains(&f.pattern))
            .map(|f| &f.result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
