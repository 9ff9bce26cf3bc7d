//! Fx Feed Crate
//!
//! This crate fetches the daily currency exchange rate feed published by a
//! central bank as pipe-delimited text, parses it into typed rate records,
//! caches the snapshot for a bounded time window, and converts prices between
//! currencies through the feed's domestic currency as the pivot.
//!
//! # Overview
//!
//! The crate supports:
//! - Normalizing and parsing the pipe-delimited daily feed
//! - Price expressions: plain numbers, `"100 EUR"`, `"100EUR"`, bare `"EUR"`
//! - Embedded-versus-explicit currency conflict detection with a tie-break flag
//! - Conversion between any two quoted currencies via the domestic pivot
//! - Snapshot caching with a configurable TTL and explicit invalidation
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   FeedProvider   | --> |    normalize     |  (canonical snapshot text)
//! +------------------+     +------------------+
//!         ^                         |
//!         |                         v
//! +------------------+     +------------------+
//! |    FeedCache     |     |    parse_feed    |  (RateTable)
//! +------------------+     +------------------+
//!         ^                         |
//!         |                         v
//! +---------------------------------------------+
//! |            ExchangeRateService              |
//! |  get_list / get_rate / get_price / probe    |
//! +---------------------------------------------+
//!                           ^
//!                           |
//!                  +------------------+
//!                  |   parse_price    |  (amount + source currency)
//!                  +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`ExchangeRateService`] - Public operations over one feed endpoint
//! - [`RateTable`] - Per-snapshot mapping from currency code to rate record
//! - [`ExchangeRate`] - One quotation, quantity divisor already applied
//! - [`PriceInput`] - Numeric-or-text price accepted by the converter
//! - [`FeedProvider`] - Transport seam (HTTPS by default, anything in tests)
//! - [`FeedCache`] - Snapshot store seam with TTL semantics

pub mod cache;
pub mod errors;
pub mod feed;
pub mod models;
pub mod price;
pub mod provider;
pub mod service;

// Re-export all public types from models
pub use models::{ExchangeRate, ParsedPrice, PriceInput, RateTable};

// Re-export the feed pipeline
pub use feed::{normalize, parse_feed};
pub use price::parse_price;

// Re-export the seams and their bundled implementations
pub use cache::{FeedCache, MemoryCache};
pub use provider::{FeedProvider, HttpFeedProvider};

// Re-export the service and its configuration
pub use errors::{CacheError, FxFeedError};
pub use service::{ExchangeRateService, FeedConfig, DEFAULT_FEED_URL};

// The transport seam takes a parsed URL
pub use url::Url;
