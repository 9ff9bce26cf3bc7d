//! Exchange rate service: snapshot loading, lookups and conversion.
//!
//! [`ExchangeRateService`] ties the pieces together. A call that needs rates
//! loads one snapshot (cache first, then the configured HTTPS endpoint),
//! normalizes and parses it, and answers against that single snapshot. There
//! is no hidden memoization: all reuse flows through the injected
//! [`FeedCache`], which makes staleness observable and invalidation explicit.

use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use url::Url;

use crate::cache::FeedCache;
use crate::errors::FxFeedError;
use crate::feed::{normalize, parse_feed};
use crate::models::{PriceInput, RateTable};
use crate::price::parse_price;
use crate::provider::FeedProvider;

/// Daily feed published by the Czech National Bank.
pub const DEFAULT_FEED_URL: &str =
    "https://www.cnb.cz/cs/financni_trhy/devizovy_trh/kurzy_devizoveho_trhu/denni_kurz.txt";

/// Currency the default feed quotes everything against.
const DEFAULT_DOMESTIC_CURRENCY: &str = "CZK";

/// Default time a fetched snapshot stays valid in the cache.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(4 * 60 * 60);

/// Cache key under which the normalized snapshot is stored.
const SNAPSHOT_CACHE_KEY: &str = "fx-feed.snapshot";

/// Service configuration.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// Feed endpoint; must be a syntactically valid HTTPS URL.
    pub feed_url: String,
    /// The pivot currency the feed quotes against. Never a table entry;
    /// its rate is 1 by convention.
    pub domestic_currency: String,
    /// How long a fetched snapshot stays valid in the cache.
    pub cache_ttl: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            domestic_currency: DEFAULT_DOMESTIC_CURRENCY.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

/// Fetches the daily rate feed and answers rate lookups and conversions.
///
/// The transport and the cache are injected trait objects, so tests run
/// against canned feeds and callers choose where snapshots live. Cloning is
/// cheap and clones share the same endpoint, transport and cache.
#[derive(Clone)]
pub struct ExchangeRateService {
    provider: Arc<dyn FeedProvider>,
    cache: Option<Arc<dyn FeedCache>>,
    feed_url: Arc<RwLock<Url>>,
    domestic_currency: String,
    cache_ttl: Duration,
}

impl ExchangeRateService {
    /// Create a service with the default configuration and no cache.
    pub fn new(provider: Arc<dyn FeedProvider>) -> Self {
        Self::with_config(provider, FeedConfig::default())
            .expect("default feed configuration must be valid")
    }

    /// Create a service from an explicit configuration.
    ///
    /// The feed URL is validated up front (syntax and HTTPS scheme); a bad URL
    /// is [`FxFeedError::InvalidConfiguration`] and nothing is fetched.
    pub fn with_config(
        provider: Arc<dyn FeedProvider>,
        config: FeedConfig,
    ) -> Result<Self, FxFeedError> {
        let feed_url = validate_feed_url(&config.feed_url)?;

        Ok(Self {
            provider,
            cache: None,
            feed_url: Arc::new(RwLock::new(feed_url)),
            domestic_currency: config.domestic_currency.to_uppercase(),
            cache_ttl: config.cache_ttl,
        })
    }

    /// Attach a snapshot cache.
    pub fn with_cache(mut self, cache: Arc<dyn FeedCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replace the feed endpoint.
    ///
    /// Rejects malformed and non-HTTPS URLs with
    /// [`FxFeedError::InvalidConfiguration`], keeping the previous endpoint.
    pub fn set_api_url(&self, url: &str) -> Result<(), FxFeedError> {
        let parsed = validate_feed_url(url)?;

        let mut feed_url = self.feed_url.write().unwrap_or_else(|poisoned| {
            warn!("Feed URL lock was poisoned, recovering");
            poisoned.into_inner()
        });
        *feed_url = parsed;
        Ok(())
    }

    /// Fetch and parse the current rate table.
    ///
    /// Within the cache TTL, repeated calls reuse one downloaded snapshot.
    pub async fn get_list(&self) -> Result<RateTable, FxFeedError> {
        let snapshot = self.snapshot().await?;
        parse_feed(&snapshot)
    }

    /// Rate for one unit of `code` in domestic currency.
    ///
    /// This is a plain table lookup: the domestic code itself is never in the
    /// table, so asking for it is [`FxFeedError::UnknownCurrency`].
    pub async fn get_rate(&self, code: &str) -> Result<Decimal, FxFeedError> {
        let table = self.get_list().await?;
        table.rate(code)
    }

    /// Convert a price expression into `expected_currency`.
    ///
    /// The price can be a number (`100`, a `Decimal`) or text (`"100 EUR"`,
    /// `"100EUR"`, `"1,5"`, bare `"EUR"`). The currency the amount is in comes
    /// from the text, from `current_currency`, or defaults to the domestic
    /// code; when the text and the parameter disagree, `prefer_parsed_currency`
    /// picks the winner (`Some(true)` = text wins, `Some(false)` = parameter
    /// wins, `None` = [`FxFeedError::AmbiguousCurrency`]).
    ///
    /// Conversion pivots through the domestic currency: both rates are looked
    /// up in one table snapshot and the answer is
    /// `amount * base_rate / target_rate`. An amount so large that this
    /// arithmetic overflows `Decimal` is rejected as
    /// [`FxFeedError::InvalidPriceFormat`] naming the input.
    pub async fn get_price(
        &self,
        price: impl Into<PriceInput>,
        expected_currency: &str,
        current_currency: Option<&str>,
        prefer_parsed_currency: Option<bool>,
    ) -> Result<Decimal, FxFeedError> {
        let price = price.into();
        let parsed = parse_price(
            &price,
            current_currency,
            prefer_parsed_currency,
            &self.domestic_currency,
        )?;

        let table = self.get_list().await?;
        let base_rate = self.pivot_rate(&table, &parsed.currency_code)?;
        let target_rate = self.pivot_rate(&table, &expected_currency.to_uppercase())?;

        parsed
            .amount
            .checked_mul(base_rate)
            .and_then(|in_domestic| in_domestic.checked_div(target_rate))
            .ok_or_else(|| FxFeedError::InvalidPriceFormat(price.to_string()))
    }

    /// Boolean probe for currency support.
    ///
    /// The domestic code is always supported. For everything else the rate is
    /// looked up and any failure, including a failed fetch, reads as `false`.
    pub async fn is_currency_supported(&self, code: &str) -> bool {
        if code.eq_ignore_ascii_case(&self.domestic_currency) {
            return true;
        }
        match self.get_rate(code).await {
            Ok(rate) => rate > Decimal::ZERO,
            Err(_) => false,
        }
    }

    /// Drop the cached snapshot so the next call fetches fresh rates.
    pub fn invalidate_cache(&self) {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.remove(SNAPSHOT_CACHE_KEY) {
                warn!("Feed cache invalidation failed: {}", e);
            }
        }
    }

    /// Load the normalized feed snapshot, preferring the cache.
    ///
    /// Cache failures are logged and treated as misses, never propagated.
    async fn snapshot(&self) -> Result<String, FxFeedError> {
        if let Some(cache) = &self.cache {
            match cache.load(SNAPSHOT_CACHE_KEY) {
                Ok(Some(snapshot)) => {
                    debug!("Feed snapshot served from cache");
                    return Ok(snapshot);
                }
                Ok(None) => {}
                Err(e) => warn!("Feed cache load failed, treating as miss: {}", e),
            }
        }

        let url = self.read_url();
        let body = self.provider.fetch_text(&url).await?;
        let snapshot = normalize(&body);
        if snapshot.is_empty() {
            return Err(FxFeedError::FeedFetchFailed(format!(
                "feed endpoint {} returned an empty body",
                url
            )));
        }

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.save(SNAPSHOT_CACHE_KEY, &snapshot, self.cache_ttl) {
                warn!("Feed cache save failed, snapshot not stored: {}", e);
            }
        }

        Ok(snapshot)
    }

    /// Rate for one unit of `code` in domestic currency, where the domestic
    /// code itself is 1 by convention.
    fn pivot_rate(&self, table: &RateTable, code: &str) -> Result<Decimal, FxFeedError> {
        if code == self.domestic_currency {
            Ok(Decimal::ONE)
        } else {
            table.rate(code)
        }
    }

    fn read_url(&self) -> Url {
        self.feed_url
            .read()
            .unwrap_or_else(|poisoned| {
                warn!("Feed URL lock was poisoned, recovering");
                poisoned.into_inner()
            })
            .clone()
    }
}

fn validate_feed_url(url: &str) -> Result<Url, FxFeedError> {
    let parsed = Url::parse(url).map_err(|e| {
        FxFeedError::InvalidConfiguration(format!("\"{}\" is not a valid URL: {}", url, e))
    })?;

    if parsed.scheme() != "https" {
        return Err(FxFeedError::InvalidConfiguration(format!(
            "feed URL must be secured, \"{}\" given",
            url
        )));
    }

    Ok(parsed)
}
