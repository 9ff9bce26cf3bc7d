use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::FxFeedError;

/// One quotation from the daily feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Issuing country display name, straight from the feed
    pub country: String,

    /// Currency display name, straight from the feed
    pub currency: String,

    /// Three-letter uppercase currency code
    pub code: String,

    /// Domestic-currency cost of one unit of this currency,
    /// already divided by the feed's quotation quantity
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Create a new rate record.
    pub fn new(country: String, currency: String, code: String, rate: Decimal) -> Self {
        Self {
            country,
            currency,
            code,
            rate,
        }
    }
}

/// Mapping from uppercase currency code to its [`ExchangeRate`].
///
/// Built fresh from one normalized feed snapshot and treated as immutable for
/// the duration of that snapshot. The domestic currency never appears as an
/// entry; its rate is 1 by convention.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RateTable {
    rates: HashMap<String, ExchangeRate>,
}

impl RateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its uppercased code.
    /// A record with the same code replaces the previous one.
    pub fn insert(&mut self, rate: ExchangeRate) {
        self.rates.insert(rate.code.to_uppercase(), rate);
    }

    /// Look up the full record for a code (case-insensitive).
    pub fn get(&self, code: &str) -> Option<&ExchangeRate> {
        self.rates.get(&code.to_uppercase())
    }

    /// Look up the rate for a code (case-insensitive).
    ///
    /// A miss produces [`FxFeedError::UnknownCurrency`] whose message lists
    /// every code currently in the table.
    pub fn rate(&self, code: &str) -> Result<Decimal, FxFeedError> {
        let code = code.to_uppercase();
        match self.rates.get(&code) {
            Some(rate) => Ok(rate.rate),
            None => Err(FxFeedError::UnknownCurrency {
                code,
                known: self.codes(),
            }),
        }
    }

    /// All codes in the table, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.rates.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate over the records in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ExchangeRate> {
        self.rates.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn euro() -> ExchangeRate {
        ExchangeRate::new(
            "EMU".to_string(),
            "euro".to_string(),
            "EUR".to_string(),
            dec!(25.0),
        )
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut table = RateTable::new();
        table.insert(euro());

        assert_eq!(table.rate("eur").unwrap(), dec!(25.0));
        assert_eq!(table.rate("EUR").unwrap(), dec!(25.0));
        assert_eq!(table.get("Eur").map(|r| r.country.as_str()), Some("EMU"));
    }

    #[test]
    fn test_unknown_currency_lists_codes() {
        let mut table = RateTable::new();
        table.insert(euro());
        table.insert(ExchangeRate::new(
            "USA".to_string(),
            "dolar".to_string(),
            "USD".to_string(),
            dec!(22.0),
        ));

        let error = table.rate("XXX").unwrap_err();
        match &error {
            FxFeedError::UnknownCurrency { code, known } => {
                assert_eq!(code, "XXX");
                assert_eq!(known, &vec!["EUR".to_string(), "USD".to_string()]);
            }
            other => panic!("expected UnknownCurrency, got {:?}", other),
        }
        let message = format!("{}", error);
        assert!(message.contains("EUR"));
        assert!(message.contains("USD"));
    }

    #[test]
    fn test_duplicate_code_keeps_later_record() {
        let mut table = RateTable::new();
        table.insert(euro());
        table.insert(ExchangeRate::new(
            "EMU".to_string(),
            "euro".to_string(),
            "EUR".to_string(),
            dec!(26.5),
        ));

        assert_eq!(table.len(), 1);
        assert_eq!(table.rate("EUR").unwrap(), dec!(26.5));
    }

    #[test]
    fn test_codes_are_sorted() {
        let mut table = RateTable::new();
        for (code, rate) in [("USD", dec!(22)), ("AUD", dec!(13.4)), ("EUR", dec!(25))] {
            table.insert(ExchangeRate::new(
                String::new(),
                String::new(),
                code.to_string(),
                rate,
            ));
        }

        assert_eq!(table.codes(), vec!["AUD", "EUR", "USD"]);
    }

    #[test]
    fn test_empty_table() {
        let table = RateTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.rate("EUR").is_err());
    }
}
