/// Web Search Client — the single point of entry for all search-API calls.
///
/// Mirrors the LLM client's shape: a `SearchBackend` trait hides the
/// provider (Tavily in production, scripted backends in tests), and
/// `SearchClient` applies the result filtering the pipeline relies on.
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::posting::SearchHit;

pub mod dedup;

const TAVILY_API_URL: &str = "https://api.tavily.com/search";
/// Snippets are truncated to this many characters before prompting.
pub const SNIPPET_MAX_CHARS: usize = 5000;
/// Result cap requested per query.
pub const MAX_RESULTS_PER_QUERY: usize = 5;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One raw result record as returned by the search API. Every field is
/// optional at the wire level; filtering happens in `search_jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawResult {
    pub title: String,
    pub url: Option<String>,
    pub content: Option<String>,
    pub raw_content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RawResult>,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    max_results: usize,
    include_raw_content: bool,
}

/// A query/response search backend with a result-count cap.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str, max_results: usize)
        -> Result<Vec<RawResult>, SearchError>;
}

/// Tavily search API backend.
pub struct TavilyBackend {
    client: Client,
    api_key: String,
}

impl TavilyBackend {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl SearchBackend for TavilyBackend {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<RawResult>, SearchError> {
        let response = self
            .client
            .post(TAVILY_API_URL)
            .bearer_auth(&self.api_key)
            .json(&SearchRequest {
                query,
                max_results,
                include_raw_content: true,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(parsed.results)
    }
}

/// The search client used by the pipeline.
#[derive(Clone)]
pub struct SearchClient {
    backend: Arc<dyn SearchBackend>,
}

impl SearchClient {
    pub fn tavily(api_key: String) -> Self {
        Self::with_backend(Arc::new(TavilyBackend::new(api_key)))
    }

    pub fn with_backend(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Runs every query in order and collects the usable hits.
    ///
    /// Per result: the URL is mandatory, the snippet prefers the curated
    /// `content` field and falls back to `raw_content`, and the snippet is
    /// truncated before further processing. A failed query contributes zero
    /// hits — it never aborts the run. No deduplication happens here.
    pub async fn search_jobs(&self, queries: &[String], max_results: usize) -> Vec<SearchHit> {
        let mut hits = Vec::new();

        for query in queries {
            let results = match self.backend.search(query, max_results).await {
                Ok(results) => results,
                Err(e) => {
                    warn!("search query '{query}' failed, skipping: {e}");
                    continue;
                }
            };

            debug!("query '{query}' returned {} results", results.len());

            for result in results {
                let Some(url) = result.url.filter(|u| !u.is_empty()) else {
                    continue;
                };
                let snippet = result
                    .content
                    .filter(|c| !c.is_empty())
                    .or(result.raw_content.filter(|c| !c.is_empty()));
                let Some(snippet) = snippet else {
                    continue;
                };

                hits.push(SearchHit {
                    title: result.title,
                    url,
                    content: truncate_chars(&snippet, SNIPPET_MAX_CHARS),
                });
            }
        }

        hits
    }
}

/// Truncates to at most `max` characters, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
