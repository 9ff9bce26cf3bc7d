use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::FxFeedError;
use crate::models::{ExchangeRate, RateTable};

/// Parse a normalized feed snapshot into a [`RateTable`].
///
/// A line counts as a data row when it is non-empty, does not start with an
/// ASCII digit, and its first character is already uppercase. That drops the
/// date header, the lowercase column header and blank lines. Every data row
/// must hold exactly five pipe-delimited fields
/// (country, currency name, quantity, code, rate); anything else is a fatal
/// [`FxFeedError::FeedParseError`].
///
/// A feed with no qualifying lines parses to an empty table.
pub fn parse_feed(text: &str) -> Result<RateTable, FxFeedError> {
    let mut table = RateTable::new();
    for line in text.split('\n') {
        if is_data_row(line) {
            table.insert(parse_line(line)?);
        }
    }
    Ok(table)
}

fn is_data_row(line: &str) -> bool {
    match line.chars().next() {
        Some(first) => !first.is_ascii_digit() && first.to_uppercase().eq(std::iter::once(first)),
        None => false,
    }
}

fn parse_line(line: &str) -> Result<ExchangeRate, FxFeedError> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 5 {
        return Err(FxFeedError::FeedParseError(format!(
            "expected 5 pipe-delimited fields, found {} in line \"{}\"",
            fields.len(),
            line
        )));
    }

    let quantity: u32 = fields[2].trim().parse().map_err(|_| {
        FxFeedError::FeedParseError(format!(
            "invalid quantity \"{}\" in line \"{}\"",
            fields[2], line
        ))
    })?;
    if quantity == 0 {
        return Err(FxFeedError::FeedParseError(format!(
            "quantity must be positive in line \"{}\"",
            line
        )));
    }

    let code = fields[3].trim().to_uppercase();
    if !is_currency_code(&code) {
        return Err(FxFeedError::FeedParseError(format!(
            "invalid currency code \"{}\" in line \"{}\"",
            fields[3], line
        )));
    }

    let quoted_rate = Decimal::from_str(&fields[4].trim().replace(',', ".")).map_err(|_| {
        FxFeedError::FeedParseError(format!(
            "invalid rate \"{}\" in line \"{}\"",
            fields[4], line
        ))
    })?;

    let rate = quoted_rate / Decimal::from(quantity);
    if rate <= Decimal::ZERO {
        return Err(FxFeedError::FeedParseError(format!(
            "rate must be positive in line \"{}\"",
            line
        )));
    }

    Ok(ExchangeRate::new(
        fields[0].trim().to_string(),
        fields[1].trim().to_string(),
        code,
        rate,
    ))
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}
