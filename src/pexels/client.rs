//! Pexels video search API client.
//!
//! Sends the search request and turns the response into download links.

use crate::config::Config;
use crate::error::{Result, SearchError};
use crate::pexels::models::{ApiSearchResponse, SearchRequest};
use crate::status::Status;
use anyhow::Context;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;

/// Base URL of the public Pexels API.
pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com";

/// Pexels video search client.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PexelsClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL for the Pexels API
    base_url: String,
}

impl PexelsClient {
    /// Create a new client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `anyhow::Result<PexelsClient>` - New client or error
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_base_url(config, &config.base_url)
    }

    /// Create a client that talks to a different API host.
    ///
    /// # Arguments
    /// * `config` - Application configuration (timeout)
    /// * `base_url` - Scheme and host, without the `/videos` path
    ///
    /// # Returns
    /// * `anyhow::Result<PexelsClient>` - New client or error
    pub fn with_base_url(config: &Config, base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search for videos and return the best download link of each match.
    ///
    /// # Arguments
    /// * `request` - Query, credentials, page size and duration filter
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Links in provider order, or the failure
    ///
    /// # Details
    /// Performs a single GET on `/videos/search`. Non-success statuses are
    /// returned as errors without retrying.
    pub async fn search_videos(&self, request: &SearchRequest) -> Result<Vec<String>> {
        if request.per_page == 0 {
            return Err(SearchError::InvalidRequest(
                "per_page must be greater than zero".to_string(),
            ));
        }

        let url = format!("{}/videos/search", self.base_url);
        let params = [
            ("query", request.query.as_str()),
            ("per_page", &request.per_page.to_string()),
        ];

        tracing::debug!(query = %request.query, per_page = request.per_page, "Searching Pexels videos");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &request.api_key)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let body = response.text().await?;
        let api_response: ApiSearchResponse = serde_json::from_str(&body)?;

        tracing::debug!(videos = api_response.videos.len(), "Received search response");

        Ok(api_response.download_links(request.min_duration))
    }

    /// Search and report the outcome, never failing.
    ///
    /// # Arguments
    /// * `request` - Search parameters
    ///
    /// # Returns
    /// * `(Vec<String>, Status)` - Links (empty on failure) and the emitted status
    pub async fn search_with_status(&self, request: &SearchRequest) -> (Vec<String>, Status) {
        let (links, status) = match self.search_videos(request).await {
            Ok(links) => {
                let status = Status::for_results(&request.query, request.min_duration, links.len());
                (links, status)
            }
            Err(e) => (Vec::new(), Status::for_error(&e)),
        };

        status.emit();
        (links, status)
    }

    /// Search and report the outcome, returning an empty list on any failure.
    ///
    /// An empty result is ambiguous between "no matches" and "request
    /// failed"; use [`PexelsClient::search_videos`] to tell them apart.
    pub async fn search(&self, request: &SearchRequest) -> Vec<String> {
        self.search_with_status(request).await.0
    }
}
