use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::acquisition::firecrawl;
use crate::llm_client;

/// Which `ProfileAssessor` backs `/api/v1/analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessorBackend {
    Llm,
    Heuristic,
}

impl FromStr for AssessorBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "llm" => Ok(AssessorBackend::Llm),
            "heuristic" => Ok(AssessorBackend::Heuristic),
            other => bail!("ASSESSOR_BACKEND must be 'llm' or 'heuristic', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// Credentials are optional on purpose: a missing `LLM_API_KEY` is reported
/// per request, a missing `FIRECRAWL_API_KEY` disables scraping.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub llm_api_url: String,
    pub llm_api_key: Option<String>,
    pub firecrawl_api_url: String,
    pub firecrawl_api_key: Option<String>,
    pub scrape_timeout: Duration,
    pub assessor_backend: AssessorBackend,
    pub demo_fixtures: bool,
    pub fixtures_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            llm_api_url: get("LLM_API_URL")
                .unwrap_or_else(|| llm_client::DEFAULT_API_URL.to_string()),
            llm_api_key: get("LLM_API_KEY"),
            firecrawl_api_url: get("FIRECRAWL_API_URL")
                .unwrap_or_else(|| firecrawl::DEFAULT_API_URL.to_string()),
            firecrawl_api_key: get("FIRECRAWL_API_KEY"),
            scrape_timeout: parse_scrape_timeout(get("SCRAPE_TIMEOUT_SECS"))?,
            assessor_backend: get("ASSESSOR_BACKEND")
                .map(|v| v.parse::<AssessorBackend>())
                .transpose()?
                .unwrap_or(AssessorBackend::Llm),
            demo_fixtures: match get("DEMO_FIXTURES") {
                Some(v) => parse_bool("DEMO_FIXTURES", &v)?,
                None => true,
            },
            fixtures_path: get("FIXTURES_PATH").map(PathBuf::from),
        })
    }
}

/// Upper bound for `SCRAPE_TIMEOUT_SECS`.
pub const MAX_SCRAPE_TIMEOUT_SECS: u64 = 600;

fn parse_scrape_timeout(value: Option<String>) -> Result<Duration> {
    let secs = value
        .unwrap_or_else(|| "90".to_string())
        .parse::<u64>()
        .context("SCRAPE_TIMEOUT_SECS must be a whole number of seconds")?;
    if !(1..=MAX_SCRAPE_TIMEOUT_SECS).contains(&secs) {
        bail!("SCRAPE_TIMEOUT_SECS must be between 1 and {MAX_SCRAPE_TIMEOUT_SECS}, got {secs}");
    }
    Ok(Duration::from_secs(secs))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean, got '{other}'"),
    }
}
