use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the `Legitimate` tier.
pub const LEGITIMATE_THRESHOLD: u8 = 75;
/// Lower bound (inclusive) of the `Questionable` tier.
pub const QUESTIONABLE_THRESHOLD: u8 = 50;

/// Three-tier credibility label derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Legitimate,
    Questionable,
    Suspicious,
}

impl Verdict {
    /// Classifies a score: ≥75 legitimate, 50–74 questionable, <50 suspicious.
    pub fn from_score(score: u8) -> Self {
        if score >= LEGITIMATE_THRESHOLD {
            Verdict::Legitimate
        } else if score >= QUESTIONABLE_THRESHOLD {
            Verdict::Questionable
        } else {
            Verdict::Suspicious
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Legitimate => "legitimate",
            Verdict::Questionable => "questionable",
            Verdict::Suspicious => "suspicious",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
