//! Data models for exchange rates and price expressions:
//! - `rate` - Rate records and the per-snapshot rate table (ExchangeRate, RateTable)
//! - `price` - Price expression inputs and parser output (PriceInput, ParsedPrice)

mod price;
mod rate;

pub use price::{ParsedPrice, PriceInput};
pub use rate::{ExchangeRate, RateTable};
