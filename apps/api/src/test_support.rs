//! Shared helpers for in-crate tests: call counters, canned scrapers and
//! throwaway HTTP servers standing in for the scraping and LLM providers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{http::StatusCode, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::acquisition::{ProfileScraper, ScrapeError};

#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Serves `body` with `status` on every path; returns the base URL.
pub async fn spawn_json_server(status: StatusCode, body: Value, counter: CallCounter) -> String {
    let app = Router::new().fallback(move || {
        let body = body.clone();
        let counter = counter.clone();
        async move {
            counter.hit();
            (status, Json(body))
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Chat-completions body whose first choice carries `content`.
pub fn chat_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}],
        "usage": {"prompt_tokens": 100, "completion_tokens": 50}
    })
}

/// A model reply in the shape the analysis prompt asks for.
pub fn assessment_json(overall: u8, verdict: &str) -> Value {
    json!({
        "overallScore": overall,
        "verdict": verdict,
        "summary": "Consistent history at verifiable employers.",
        "categories": {
            "companyVerification": {"score": 85, "explanation": "Known employers."},
            "artifactsCredentials": {"score": 78, "explanation": "Degree and talks listed."},
            "experienceAnalysis": {"score": 84, "explanation": "Plausible progression."},
            "networkPatterns": {"score": 80, "explanation": "Network fits seniority."}
        },
        "experiences": [
            {
                "title": "Staff Engineer",
                "company": "Globex",
                "duration": "2019 - Present",
                "score": 88,
                "analysis": "Detailed scope with named systems.",
                "redFlags": [],
                "strengths": ["Specific systems named"]
            },
            {
                "title": "Engineer",
                "company": "Initech",
                "duration": "2015 - 2019",
                "score": 71,
                "analysis": "Generic description.",
                "redFlags": ["Vague responsibilities"],
                "strengths": []
            }
        ]
    })
}

/// Scraper returning a fixed outcome and counting calls.
pub struct StaticScraper {
    pub outcome: Result<Option<String>, u16>,
    pub calls: CallCounter,
}

impl StaticScraper {
    pub fn returning(content: Option<&str>) -> Self {
        Self {
            outcome: Ok(content.map(str::to_string)),
            calls: CallCounter::default(),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            outcome: Err(status),
            calls: CallCounter::default(),
        }
    }
}

#[async_trait]
impl ProfileScraper for StaticScraper {
    async fn scrape(&self, _url: &str) -> Result<Option<String>, ScrapeError> {
        self.calls.hit();
        match &self.outcome {
            Ok(content) => Ok(content.clone()),
            Err(status) => Err(ScrapeError::Api {
                status: *status,
                message: "blocked".to_string(),
            }),
        }
    }
}
