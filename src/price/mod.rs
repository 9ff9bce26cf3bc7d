//! Price-expression parsing and currency resolution.
//!
//! A price expression is either a plain amount or a string carrying an amount
//! and an optional trailing 3-letter currency code: `"100"`, `"100 EUR"`,
//! `"100EUR"`, `"1,5"` or a bare `"EUR"` (amount 1). When the expression embeds
//! a code and the caller also names one, the two must agree unless a tie-break
//! preference says which side wins.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::FxFeedError;
use crate::models::{ParsedPrice, PriceInput};

lazy_static! {
    /// Amount (digits and dots, possibly empty), optional whitespace,
    /// optional 3-letter code; anchored to consume the whole expression.
    static ref PRICE_PATTERN: Regex =
        Regex::new(r"^([0-9.]*)\s*([A-Z]{3})?$").expect("price pattern must be valid");
}

/// Parse a price expression and resolve which currency the amount is in.
///
/// Resolution rules:
/// - code embedded in the text only: the embedded code wins,
/// - explicit `current_currency` only: the explicit code wins,
/// - neither: the amount is in `domestic_code`,
/// - both and they differ: `prefer_parsed_currency` decides (`Some(true)`
///   embedded, `Some(false)` explicit); without a preference this is
///   [`FxFeedError::AmbiguousCurrency`].
///
/// All comparisons run on uppercased codes, so `"100 eur"` with an explicit
/// `"EUR"` is not ambiguous.
pub fn parse_price(
    price: &PriceInput,
    current_currency: Option<&str>,
    prefer_parsed_currency: Option<bool>,
    domestic_code: &str,
) -> Result<ParsedPrice, FxFeedError> {
    let explicit = current_currency
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty());

    let (amount, embedded) = match price {
        PriceInput::Amount(amount) => (*amount, None),
        PriceInput::Text(text) => parse_text(text)?,
    };

    let currency_code =
        resolve_currency(explicit, embedded, prefer_parsed_currency, domestic_code)?;

    Ok(ParsedPrice {
        amount,
        currency_code,
    })
}

/// Split a text expression into its amount and optional embedded code.
fn parse_text(text: &str) -> Result<(Decimal, Option<String>), FxFeedError> {
    let cleaned = text.trim().to_uppercase().replace(',', ".");
    if cleaned.is_empty() {
        return Err(FxFeedError::InvalidPriceFormat(text.to_string()));
    }

    let captures = PRICE_PATTERN
        .captures(&cleaned)
        .ok_or_else(|| FxFeedError::InvalidPriceFormat(text.to_string()))?;

    let numeric = captures.get(1).map_or("", |m| m.as_str());
    let amount = if numeric.is_empty() {
        // bare currency code, e.g. "EUR" means one euro
        Decimal::ONE
    } else {
        Decimal::from_str(numeric)
            .map_err(|_| FxFeedError::InvalidPriceFormat(text.to_string()))?
    };
    let embedded = captures.get(2).map(|m| m.as_str().to_string());

    Ok((amount, embedded))
}

fn resolve_currency(
    explicit: Option<String>,
    embedded: Option<String>,
    prefer_parsed_currency: Option<bool>,
    domestic_code: &str,
) -> Result<String, FxFeedError> {
    match (explicit, embedded) {
        (None, None) => Ok(domestic_code.to_uppercase()),
        (Some(explicit), None) => Ok(explicit),
        (None, Some(embedded)) => Ok(embedded),
        (Some(explicit), Some(embedded)) => {
            if explicit == embedded {
                return Ok(embedded);
            }
            match prefer_parsed_currency {
                Some(true) => Ok(embedded),
                Some(false) => Ok(explicit),
                None => Err(FxFeedError::AmbiguousCurrency { explicit, embedded }),
            }
        }
    }
}
