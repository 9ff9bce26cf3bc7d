//! Feed transport abstractions and implementations.
//!
//! This module contains:
//! - The `FeedProvider` trait that all transports implement
//! - `HttpFeedProvider`, the reqwest-backed default transport
//!
//! The service never talks to the network directly; it goes through a
//! `FeedProvider`, so tests can swap in a canned transport and alternative
//! sources (a file, a proxy, a recorded fixture) stay possible.

mod http;
mod traits;

pub use http::HttpFeedProvider;
pub use traits::FeedProvider;
