//! Content Acquisition — obtains raw profile text for analysis.
//!
//! Order: pasted text → one scrape attempt → `ManualPasteNeeded`.
//! A failed or empty scrape is an expected outcome (anti-scraping defences),
//! never a hard error.

pub mod firecrawl;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

pub use firecrawl::FirecrawlScraper;

pub const MANUAL_PASTE_MESSAGE: &str = "⚠️ LinkedIn blocked automatic scraping. Please:\n\n\
    1. Visit the LinkedIn profile in your browser\n\
    2. Select all text (Ctrl+A or Cmd+A)\n\
    3. Copy it (Ctrl+C or Cmd+C)\n\
    4. Paste it in the text area above\n\
    5. Click Analyze again";

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Scrape API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Scrape reported failure: {0}")]
    Unsuccessful(String),
}

/// A remote page scraper. Implement this to swap scraping providers.
///
/// `Ok(None)` means the page was fetched but yielded no content.
#[async_trait]
pub trait ProfileScraper: Send + Sync {
    async fn scrape(&self, url: &str) -> Result<Option<String>, ScrapeError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Pasted,
    Scraped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquiredProfile {
    pub text: String,
    pub source: ContentSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    Acquired(AcquiredProfile),
    ManualPasteNeeded,
}

/// Prefixes `https://` when the URL carries no http(s) scheme.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Resolves profile text for `url`.
///
/// `scraper` is `None` when no scraping credential is configured; in that
/// case no network call is made.
pub async fn acquire_content(
    url: &str,
    pasted: Option<&str>,
    scraper: Option<&dyn ProfileScraper>,
) -> Acquisition {
    if let Some(text) = pasted.map(str::trim).filter(|t| !t.is_empty()) {
        info!("Using pasted profile content ({} chars)", text.len());
        return Acquisition::Acquired(AcquiredProfile {
            text: text.to_string(),
            source: ContentSource::Pasted,
        });
    }

    let Some(scraper) = scraper else {
        info!("No pasted content and scraping is not configured");
        return Acquisition::ManualPasteNeeded;
    };

    info!("Attempting to scrape {url}");
    match scraper.scrape(url).await {
        Ok(Some(text)) if !text.trim().is_empty() => {
            info!("Scraped profile, content length: {}", text.len());
            Acquisition::Acquired(AcquiredProfile {
                text,
                source: ContentSource::Scraped,
            })
        }
        Ok(_) => {
            warn!("Scrape succeeded but no content returned");
            Acquisition::ManualPasteNeeded
        }
        Err(e) => {
            warn!("Scraping failed: {e}");
            Acquisition::ManualPasteNeeded
        }
    }
}
