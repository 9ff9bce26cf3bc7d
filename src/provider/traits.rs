//! Feed provider trait definition.

use async_trait::async_trait;
use url::Url;

use crate::errors::FxFeedError;

/// Trait for feed transports.
///
/// Implement this trait to fetch the daily feed from somewhere other than the
/// default HTTPS endpoint. A call is a single request: retries, if any, belong
/// to the implementation, never to the service.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use fx_feed::{FeedProvider, FxFeedError};
/// use url::Url;
///
/// struct FixtureProvider {
///     body: String,
/// }
///
/// #[async_trait]
/// impl FeedProvider for FixtureProvider {
///     async fn fetch_text(&self, _url: &Url) -> Result<String, FxFeedError> {
///         Ok(self.body.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// Download the feed body as text.
    ///
    /// # Arguments
    ///
    /// * `url` - The configured feed endpoint, already validated as HTTPS
    ///
    /// # Returns
    ///
    /// The raw response body on success, or [`FxFeedError::FeedFetchFailed`]
    /// when the endpoint cannot be reached or answers with an error status.
    async fn fetch_text(&self, url: &Url) -> Result<String, FxFeedError>;
}
