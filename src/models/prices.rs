use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Lookup table from currency code to unit price in the reference unit.
///
/// A currency absent from the table is priced at `0.0`, never treated as an
/// error. That rule lives here so callers never have to spell it out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(HashMap<String, f64>);

impl PriceTable {
    /// Create an empty price table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the price for a currency
    pub fn insert(&mut self, currency: impl Into<String>, price: f64) {
        self.0.insert(currency.into(), price);
    }

    /// Unit price for a currency, `0.0` when unknown
    pub fn price_of(&self, currency: &str) -> f64 {
        self.0.get(currency).copied().unwrap_or(0.0)
    }

    /// Whether the table carries a price for the currency
    pub fn contains(&self, currency: &str) -> bool {
        self.0.contains_key(currency)
    }

    /// Number of priced currencies
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, f64>> for PriceTable {
    fn from(map: HashMap<String, f64>) -> Self {
        Self(map)
    }
}

impl<S: Into<String>, const N: usize> From<[(S, f64); N]> for PriceTable {
    fn from(pairs: [(S, f64); N]) -> Self {
        Self(pairs.into_iter().map(|(c, p)| (c.into(), p)).collect())
    }
}

impl FromIterator<(String, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_price() {
        let prices = PriceTable::from([("OSMO", 1.5), ("ETH", 3000.0)]);
        assert_eq!(prices.price_of("OSMO"), 1.5);
        assert_eq!(prices.price_of("ETH"), 3000.0);
    }

    #[test]
    fn test_unknown_price_is_zero() {
        let prices = PriceTable::from([("OSMO", 1.5)]);
        assert_eq!(prices.price_of("DOGE"), 0.0);
        assert!(!prices.contains("DOGE"));
    }

    #[test]
    fn test_empty_table() {
        let prices = PriceTable::new();
        assert!(prices.is_empty());
        assert_eq!(prices.price_of("ETH"), 0.0);
    }

    #[test]
    fn test_insert_replaces_quote() {
        let mut prices = PriceTable::new();
        prices.insert("ZIL", 0.02);
        prices.insert("ZIL", 0.03);
        assert_eq!(prices.len(), 1);
        assert_eq!(prices.price_of("ZIL"), 0.03);
    }
}
