use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::acquisition::{FirecrawlScraper, ProfileScraper};
use crate::analysis::assessor::{HeuristicAssessor, LlmAssessor, ProfileAssessor};
use crate::analysis::fixtures::FixtureTable;
use crate::config::{AssessorBackend, Config};
use crate::llm_client::{self, LlmClient};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no scraping credential is configured.
    pub scraper: Option<Arc<dyn ProfileScraper>>,
    /// Pluggable assessor. Default: LlmAssessor. Swap via ASSESSOR_BACKEND.
    pub assessor: Arc<dyn ProfileAssessor>,
    pub fixtures: Arc<FixtureTable>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let scraper: Option<Arc<dyn ProfileScraper>> = match &config.firecrawl_api_key {
            Some(key) => {
                info!("Scraping enabled (timeout {:?})", config.scrape_timeout);
                Some(Arc::new(FirecrawlScraper::new(
                    &config.firecrawl_api_url,
                    key.clone(),
                    config.scrape_timeout,
                )?))
            }
            None => {
                info!("FIRECRAWL_API_KEY not set, scraping disabled; pasted content required");
                None
            }
        };

        let assessor: Arc<dyn ProfileAssessor> = match config.assessor_backend {
            AssessorBackend::Llm => {
                let llm = LlmClient::new(config.llm_api_url.clone(), config.llm_api_key.clone())?;
                if llm.is_configured() {
                    info!("LLM client initialized (model: {})", llm_client::MODEL);
                } else {
                    tracing::warn!("LLM_API_KEY not set; analysis requests will fail");
                }
                Arc::new(LlmAssessor(llm))
            }
            AssessorBackend::Heuristic => {
                info!("Using heuristic assessor (no LLM calls)");
                Arc::new(HeuristicAssessor)
            }
        };

        let mut fixtures = FixtureTable::default();
        if config.demo_fixtures {
            fixtures.extend(FixtureTable::builtin()?);
            if let Some(path) = &config.fixtures_path {
                fixtures.extend(FixtureTable::from_file(path)?);
            }
            if !fixtures.is_empty() {
                info!("Loaded {} demo fixture(s)", fixtures.len());
            }
        }

        Ok(AppState {
            scraper,
            assessor,
            fixtures: Arc::new(fixtures),
        })
    }
}
