//! Feed ingestion: normalization and parsing of the daily rate feed.
//!
//! The feed is pipe-delimited text published once per business day. The first
//! line is a date header, the second a lowercase column header, then one row
//! per quoted currency:
//!
//! ```text
//! 22.08.2026 #163
//! země|měna|množství|kód|kurz
//! Austrálie|dolar|1|AUD|13,354
//! EMU|euro|1|EUR|24,755
//! Japonsko|jen|100|JPY|14,720
//! ```
//!
//! [`normalize`] canonicalizes the raw body, [`parse_feed`] turns normalized
//! text into a [`RateTable`](crate::models::RateTable).

mod normalizer;
mod parser;

pub use normalizer::normalize;
pub use parser::parse_feed;
