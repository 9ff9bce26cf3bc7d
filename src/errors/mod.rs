//! Error types for the fx-feed crate.
//!
//! This module provides:
//! - [`FxFeedError`]: The main error enum for all feed and conversion operations
//! - [`CacheError`]: Failures raised by cache implementations

use thiserror::Error;

/// Errors that can occur while fetching, parsing, or converting exchange rates.
///
/// All variants are surfaced immediately; nothing is retried internally. The one
/// deliberate downgrade is `ExchangeRateService::is_currency_supported`, which turns
/// any failure into a boolean `false`.
#[derive(Error, Debug)]
pub enum FxFeedError {
    /// The service was given a malformed or non-HTTPS feed URL.
    /// Rejected before any fetch is attempted.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The feed could not be downloaded, or the response body was empty.
    #[error("Feed fetch failed: {0}")]
    FeedFetchFailed(String),

    /// A feed line did not match the pipe-delimited format.
    /// Malformed lines are fatal, never skipped.
    #[error("Feed parse error: {0}")]
    FeedParseError(String),

    /// The requested currency has no entry in the rate table.
    /// The message lists every known code so callers can see what the feed offers.
    #[error("Currency rate for code \"{code}\" does not exist. Did you mean \"{}\"?", .known.join("\", \""))]
    UnknownCurrency {
        /// The code that missed, uppercased
        code: String,
        /// Every code present in the table, sorted
        known: Vec<String>,
    },

    /// The price expression did not match the expected grammar, or its amount
    /// is too large for the conversion arithmetic.
    #[error("Invalid price format: \"{0}\". Did you mean a format like \"10.3EUR\"?")]
    InvalidPriceFormat(String),

    /// The currency embedded in the price string disagrees with the explicit
    /// current-currency parameter and no tie-break preference was given.
    #[error("The input currency is ambiguous: the parameter says the price is in \"{explicit}\", but the price itself carries \"{embedded}\"")]
    AmbiguousCurrency {
        /// The code supplied by the caller
        explicit: String,
        /// The code parsed out of the price string
        embedded: String,
    },
}

/// Failure raised by a [`FeedCache`](crate::cache::FeedCache) implementation.
///
/// The service never propagates these; a failing cache degrades to a miss.
#[derive(Error, Debug)]
#[error("Cache error: {0}")]
pub struct CacheError(pub String);
