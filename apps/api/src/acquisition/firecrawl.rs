//! Firecrawl-backed `ProfileScraper`.
//!
//! One POST to `/v1/scrape` per profile. The request asks for both markdown
//! and HTML, waits for client-side rendering and scrolls twice so lazily
//! loaded sections (experience, education) are present in the snapshot.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ProfileScraper, ScrapeError};

pub const DEFAULT_API_URL: &str = "https://api.firecrawl.dev";
const WAIT_FOR_MS: u64 = 8000;
/// Extra client-side slack on top of the provider timeout.
const CLIENT_GRACE: Duration = Duration::from_secs(10);

const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageAction {
    Wait { milliseconds: u64 },
    Scroll { direction: &'static str },
}

/// wait → scroll → wait → scroll → wait
fn lazy_load_actions() -> Vec<PageAction> {
    vec![
        PageAction::Wait { milliseconds: 4000 },
        PageAction::Scroll { direction: "down" },
        PageAction::Wait { milliseconds: 3000 },
        PageAction::Scroll { direction: "down" },
        PageAction::Wait { milliseconds: 2000 },
    ]
}

fn browser_headers() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("User-Agent", MOBILE_USER_AGENT),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
        ("Accept-Language", "en-US,en;q=0.9"),
        ("Accept-Encoding", "gzip, deflate, br"),
        ("Referer", "https://www.google.com/"),
        ("Connection", "keep-alive"),
        ("Sec-Fetch-Dest", "document"),
        ("Sec-Fetch-Mode", "navigate"),
        ("Sec-Fetch-Site", "none"),
    ])
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: [&'static str; 2],
    only_main_content: bool,
    wait_for: u64,
    timeout: u64,
    headers: BTreeMap<&'static str, &'static str>,
    actions: Vec<PageAction>,
}

#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    #[serde(default)]
    success: bool,
    data: Option<ScrapeData>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScrapeData {
    markdown: Option<String>,
    html: Option<String>,
}

impl ScrapeResponse {
    /// Markdown if non-blank, else HTML if non-blank.
    fn into_content(self) -> Result<Option<String>, ScrapeError> {
        if !self.success {
            return Err(ScrapeError::Unsuccessful(
                self.error.unwrap_or_else(|| "unknown".to_string()),
            ));
        }
        let Some(data) = self.data else {
            return Ok(None);
        };
        Ok([data.markdown, data.html]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty()))
    }
}

pub struct FirecrawlScraper {
    client: Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl FirecrawlScraper {
    pub fn new(api_url: &str, api_key: String, timeout: Duration) -> Result<Self, ScrapeError> {
        Ok(Self {
            client: Client::builder()
                .timeout(timeout.saturating_add(CLIENT_GRACE))
                .build()?,
            endpoint: format!("{}/v1/scrape", api_url.trim_end_matches('/')),
            api_key,
            timeout,
        })
    }
}

#[async_trait]
impl ProfileScraper for FirecrawlScraper {
    async fn scrape(&self, url: &str) -> Result<Option<String>, ScrapeError> {
        let request = ScrapeRequest {
            url,
            formats: ["markdown", "html"],
            only_main_content: false,
            wait_for: WAIT_FOR_MS,
            timeout: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            headers: browser_headers(),
            actions: lazy_load_actions(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ScrapeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ScrapeResponse = response.json().await?;
        debug!("Scrape result success: {}", body.success);
        body.into_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_json_server, CallCounter};
    use axum::http::StatusCode;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ScrapeResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_markdown_preferred_over_html() {
        let body = parse(json!({
            "success": true,
            "data": {"markdown": "# Jane", "html": "<h1>Jane</h1>"}
        }));
        assert_eq!(body.into_content().unwrap().as_deref(), Some("# Jane"));
    }

    #[test]
    fn test_html_used_when_markdown_blank() {
        let body = parse(json!({
            "success": true,
            "data": {"markdown": "   ", "html": "<h1>Jane</h1>"}
        }));
        assert_eq!(body.into_content().unwrap().as_deref(), Some("<h1>Jane</h1>"));
    }

    #[test]
    fn test_success_without_data_is_none() {
        let body = parse(json!({"success": true}));
        assert_eq!(body.into_content().unwrap(), None);
    }

    #[test]
    fn test_unsuccessful_is_error() {
        let body = parse(json!({"success": false, "error": "blocked"}));
        assert!(matches!(
            body.into_content(),
            Err(ScrapeError::Unsuccessful(msg)) if msg == "blocked"
        ));
    }

    #[test]
    fn test_request_shape() {
        let request = ScrapeRequest {
            url: "https://linkedin.com/in/jane",
            formats: ["markdown", "html"],
            only_main_content: false,
            wait_for: WAIT_FOR_MS,
            timeout: 90_000,
            headers: browser_headers(),
            actions: lazy_load_actions(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["onlyMainContent"], false);
        assert_eq!(value["waitFor"], 8000);
        assert_eq!(value["timeout"], 90_000);
        assert_eq!(value["actions"][0], json!({"type": "wait", "milliseconds": 4000}));
        assert_eq!(value["actions"][1], json!({"type": "scroll", "direction": "down"}));
        assert_eq!(value["actions"].as_array().unwrap().len(), 5);
        assert!(value["headers"]["User-Agent"]
            .as_str()
            .unwrap()
            .contains("iPhone"));
    }

    #[tokio::test]
    async fn test_scrape_against_provider() {
        let counter = CallCounter::default();
        let base = spawn_json_server(
            StatusCode::OK,
            json!({"success": true, "data": {"markdown": "Jane Doe — Staff Engineer"}}),
            counter.clone(),
        )
        .await;
        let scraper =
            FirecrawlScraper::new(&base, "fc-key".to_string(), Duration::from_secs(5)).unwrap();

        let content = scraper.scrape("https://linkedin.com/in/jane").await.unwrap();
        assert_eq!(content.as_deref(), Some("Jane Doe — Staff Engineer"));
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_huge_timeout_does_not_panic() {
        assert!(
            FirecrawlScraper::new(DEFAULT_API_URL, "fc-key".to_string(), Duration::MAX).is_ok()
        );
    }

    #[tokio::test]
    async fn test_provider_error_status() {
        let base = spawn_json_server(
            StatusCode::FORBIDDEN,
            json!({"error": "blocked"}),
            CallCounter::default(),
        )
        .await;
        let scraper =
            FirecrawlScraper::new(&base, "fc-key".to_string(), Duration::from_secs(5)).unwrap();

        match scraper.scrape("https://linkedin.com/in/jane").await {
            Err(ScrapeError::Api { status, .. }) => assert_eq!(status, 403),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
