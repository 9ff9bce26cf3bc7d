//! HTTPS feed transport backed by reqwest.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::errors::FxFeedError;
use crate::provider::FeedProvider;

/// Request timeout for feed downloads.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default transport: a single GET against the configured endpoint.
///
/// The central bank publishes the feed as a small static text file, so one
/// request with a 30 second timeout covers it. Timeouts, connection failures
/// and non-success statuses all map to [`FxFeedError::FeedFetchFailed`].
pub struct HttpFeedProvider {
    client: Client,
}

impl HttpFeedProvider {
    /// Create a provider with the default timeout.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for HttpFeedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedProvider for HttpFeedProvider {
    async fn fetch_text(&self, url: &Url) -> Result<String, FxFeedError> {
        debug!("Fetching exchange rate feed from {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                FxFeedError::FeedFetchFailed(format!("request to {} timed out", url))
            } else {
                FxFeedError::FeedFetchFailed(format!("request to {} failed: {}", url, e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FxFeedError::FeedFetchFailed(format!(
                "feed endpoint {} answered with HTTP {}",
                url, status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FxFeedError::FeedFetchFailed(format!("failed to read feed body: {}", e)))
    }
}
