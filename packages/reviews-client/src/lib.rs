//! Typed REST client for the Reviews Copilot backend.
//!
//! Covers the full management surface: bulk ingest, the filtered review
//! listing, single-review fetch, AI reply suggestions, aggregate
//! analytics, similarity search, and the health probe. Every call sends
//! the static `x-api-key` header and decodes into the structs in
//! [`types`].
//!
//! # Example
//!
//! ```rust,ignore
//! use reviews_client::{ApiConfig, ReviewQuery, ReviewsClient};
//!
//! let client = ReviewsClient::new(ApiConfig::default());
//!
//! let page = client.list_reviews(&ReviewQuery::default()).await?;
//! for review in &page.reviews {
//!     println!("[{}] {}", review.location, review.text);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ApiError, Result};
pub use types::{
    AnalyticsSummary, HealthStatus, IngestReceipt, ReplyTags, Review, ReviewQuery, ReviewsPage,
    SearchHit, SearchResults, SuggestedReply,
};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use types::push_if_set;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_KEY: &str = "changeme";

/// Header the backend checks on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Where the backend lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    api_key: String,
}

impl ApiConfig {
    /// Build a config from a backend origin like `http://localhost:8000`.
    /// Trailing slashes are trimmed so path joins stay predictable.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// The `/api` prefix all operations hang off of.
    pub fn api_root(&self) -> String {
        format!("{}/api", self.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_API_KEY)
    }
}

#[derive(Clone)]
pub struct ReviewsClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ReviewsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Probe backend liveness.
    pub async fn health(&self) -> Result<HealthStatus> {
        tracing::debug!("Checking backend health");
        let url = format!("{}/health", self.config.api_root());
        self.send(self.client.get(&url)).await
    }

    /// Upload a batch of raw review objects. With `reset` the backend
    /// drops its existing store first, so `ingest(&[], true)` clears it.
    pub async fn ingest(&self, reviews: &[serde_json::Value], reset: bool) -> Result<IngestReceipt> {
        tracing::info!(count = reviews.len(), reset, "Ingesting review batch");
        let url = format!("{}/ingest", self.config.api_root());
        self.send(
            self.client
                .post(&url)
                .query(&[("reset", reset.to_string())])
                .json(&reviews),
        )
        .await
    }

    /// Fetch one page of reviews matching `query`.
    pub async fn list_reviews(&self, query: &ReviewQuery) -> Result<ReviewsPage> {
        tracing::debug!(page = query.page, page_size = query.page_size, "Listing reviews");
        let url = format!("{}/reviews", self.config.api_root());
        self.send(self.client.get(&url).query(&query.to_params()))
            .await
    }

    /// Fetch a single review by id.
    pub async fn get_review(&self, id: i64) -> Result<Review> {
        tracing::debug!(review_id = id, "Fetching review");
        let url = format!("{}/reviews/{}", self.config.api_root(), id);
        self.send(self.client.get(&url)).await
    }

    /// Ask the backend to draft a reply to the given review.
    pub async fn suggest_reply(&self, id: i64) -> Result<SuggestedReply> {
        tracing::info!(review_id = id, "Requesting reply suggestion");
        let url = format!("{}/reviews/{}/suggest-reply", self.config.api_root(), id);
        self.send(self.client.post(&url)).await
    }

    /// Fetch aggregate sentiment and topic counts.
    pub async fn analytics(&self) -> Result<AnalyticsSummary> {
        tracing::debug!("Fetching analytics summary");
        let url = format!("{}/analytics", self.config.api_root());
        self.send(self.client.get(&url)).await
    }

    /// Find the `k` reviews most similar to the free-text query.
    pub async fn search(&self, q: &str, k: u32) -> Result<SearchResults> {
        tracing::debug!(q, k, "Running similarity search");
        let mut params = Vec::new();
        push_if_set(&mut params, "q", Some(q));
        params.push(("k", k.to_string()));
        let url = format!("{}/search", self.config.api_root());
        self.send(self.client.get(&url).query(&params)).await
    }

    /// Attach the API key, send, and run the shared response handling.
    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> Result<T> {
        let resp = req
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        interpret_response(status, &body)
    }
}

/// Turn a raw response into a decoded value or an [`ApiError`].
///
/// The body is parsed before the status is checked: the backend speaks
/// JSON even for errors, so a non-JSON body means something other than
/// the API answered and is reported as such regardless of status.
fn interpret_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    let value = if body.is_empty() {
        serde_json::Value::Null
    } else {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(value) => value,
            Err(_) => return Err(ApiError::InvalidJson),
        }
    };

    if !status.is_success() {
        let message = detail_message(&value)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Request failed".to_string());
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_value(value)?)
}

/// Error payloads carry a `detail` field: a string for hand-raised
/// errors, structured JSON for request-validation failures.
fn detail_message(value: &serde_json::Value) -> Option<String> {
    match value.get("detail")? {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
