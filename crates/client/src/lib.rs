//! HTTP client for the card search endpoint.
//!
//! One request per call, no retries, no caching. Failures are classified at
//! this boundary ([`SearchError`]) so the UI can surface them without
//! inspecting transport details, and [`LatestOnly`] lets callers discard
//! responses that arrive after a newer request has been issued.

use std::time::Duration;

use carddex_core::{ClientConfig, PageResult, SearchParams};
use tracing::{debug, warn};
use url::Url;

mod error;
mod latest;

pub use error::SearchError;
pub use latest::LatestOnly;

/// Client for the `/search_dynamic` endpoint. Cloning is cheap; the inner
/// connection pool is shared.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base: Url,
}

impl SearchClient {
    /// Build a client from configuration.
    ///
    /// Fails only if the configured endpoint is not a valid absolute URL.
    pub fn new(config: &ClientConfig) -> Result<Self, SearchError> {
        let mut base = Url::parse(&config.endpoint)
            .map_err(|_| SearchError::BadEndpoint(config.endpoint.clone()))?;
        // `Url::join` drops the last path segment unless the base ends in
        // '/', which would silently rewrite "/app" to "/search_dynamic".
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(SearchError::Network)?;
        Ok(Self { http, base })
    }

    /// Fetch one page of results for the given parameters.
    pub async fn fetch_page(
        &self,
        params: &SearchParams,
        page: u32,
    ) -> Result<PageResult, SearchError> {
        let url = params
            .request_url(&self.base, page)
            .map_err(|_| SearchError::BadEndpoint(self.base.to_string()))?;
        debug!(url = %url, "Fetching card page");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(error = %e, "Card search request failed");
            SearchError::Network(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Card search returned error status");
            return Err(SearchError::Server { status: status.as_u16() });
        }

        // Decode via text so malformed bodies are classified as decode
        // failures rather than transport failures.
        let body = response.text().await.map_err(SearchError::Network)?;
        let page_result: PageResult = serde_json::from_str(&body)?;
        debug!(cards = page_result.cards.len(), total_pages = page_result.total_pages, "Page decoded");
        Ok(page_result)
    }
}
