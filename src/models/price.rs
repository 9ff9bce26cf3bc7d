use rust_decimal::Decimal;

/// A price accepted by the converter: either an amount that is already numeric
/// or a text expression such as `"100 EUR"`, `"100EUR"`, `"1,5"` or `"EUR"`.
#[derive(Clone, Debug, PartialEq)]
pub enum PriceInput {
    /// A plain amount carrying no currency of its own.
    Amount(Decimal),
    /// A text expression, possibly with a trailing currency code.
    Text(String),
}

impl From<Decimal> for PriceInput {
    fn from(amount: Decimal) -> Self {
        Self::Amount(amount)
    }
}

impl From<i64> for PriceInput {
    fn from(amount: i64) -> Self {
        Self::Amount(Decimal::from(amount))
    }
}

impl From<&str> for PriceInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl std::fmt::Display for PriceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{}", amount),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Amount and source currency resolved from a price expression.
/// Transient parser output, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedPrice {
    /// The monetary amount; defaults to 1 for bare currency codes
    pub amount: Decimal,
    /// The uppercase code of the currency the amount is expressed in
    pub currency_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_input_displays_the_raw_input() {
        assert_eq!(PriceInput::from(100).to_string(), "100");
        assert_eq!(PriceInput::from(dec!(9.99)).to_string(), "9.99");
        assert_eq!(PriceInput::from("100 EUR").to_string(), "100 EUR");
    }

    #[test]
    fn test_price_input_conversions() {
        assert_eq!(PriceInput::from(100), PriceInput::Amount(dec!(100)));
        assert_eq!(PriceInput::from(dec!(9.99)), PriceInput::Amount(dec!(9.99)));
        assert_eq!(
            PriceInput::from("100 EUR"),
            PriceInput::Text("100 EUR".to_string())
        );
        assert_eq!(
            PriceInput::from("50".to_string()),
            PriceInput::Text("50".to_string())
        );
    }
}
