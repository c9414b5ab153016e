use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::models::PriceTable;
use crate::traits::price_provider::PriceProvider;

/// Price provider backed by a fixed quote table, with a concurrent cache
/// for single-currency lookups.
///
/// The source table plays the role of an upstream price API; the cache
/// keeps repeated `price_of` calls from hitting it again. Currencies the
/// source does not quote resolve to `None` and are never cached.
pub struct CachedPriceProvider {
    source: PriceTable,
    fetch_delay: Duration,
    cache: DashMap<String, f64>,
}

impl CachedPriceProvider {
    /// Create a provider over the given source table
    pub fn new(source: PriceTable, fetch_delay: Duration) -> Self {
        Self {
            source,
            fetch_delay,
            cache: DashMap::new(),
        }
    }

    /// The stock demo quotes matching the demo portfolio
    pub fn with_demo_quotes(fetch_delay: Duration) -> Self {
        Self::new(
            PriceTable::from([
                ("OSMO", 1.5),
                ("ETH", 3000.0),
                ("ARB", 1.2),
                ("ZIL", 0.02),
                ("NEO", 10.0),
                ("Unknown", 0.5),
            ]),
            fetch_delay,
        )
    }

    async fn fetch_quote(&self, currency: &str) -> Option<f64> {
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        if self.source.contains(currency) {
            Some(self.source.price_of(currency))
        } else {
            None
        }
    }
}

#[async_trait]
impl PriceProvider for CachedPriceProvider {
    async fn fetch_prices(&self) -> anyhow::Result<PriceTable> {
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        debug!("Serving price table with {} quotes", self.source.len());
        Ok(self.source.clone())
    }

    async fn price_of(&self, currency: &str) -> Option<f64> {
        if let Some(price) = self.cache.get(currency) {
            return Some(*price);
        }

        match self.fetch_quote(currency).await {
            Some(price) => {
                self.cache.insert(currency.to_string(), price);
                Some(price)
            }
            None => {
                debug!("No quote for {}", currency);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_quote() {
        let provider = CachedPriceProvider::with_demo_quotes(Duration::ZERO);
        assert_eq!(provider.price_of("OSMO").await, Some(1.5));
        assert_eq!(provider.price_of("ETH").await, Some(3000.0));
    }

    #[tokio::test]
    async fn test_unknown_quote_is_none() {
        let provider = CachedPriceProvider::with_demo_quotes(Duration::ZERO);
        assert_eq!(provider.price_of("DOGE").await, None);
    }

    #[tokio::test]
    async fn test_second_lookup_hits_cache() {
        let provider = CachedPriceProvider::with_demo_quotes(Duration::ZERO);
        let first = provider.price_of("ZIL").await;
        assert!(provider.cache.contains_key("ZIL"));
        let second = provider.price_of("ZIL").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fetch_prices_returns_full_table() {
        let provider = CachedPriceProvider::with_demo_quotes(Duration::ZERO);
        let prices = provider.fetch_prices().await.unwrap();
        assert_eq!(prices.len(), 6);
        assert_eq!(prices.price_of("ARB"), 1.2);
    }

    #[tokio::test]
    async fn test_empty_source_table() {
        let provider = CachedPriceProvider::new(PriceTable::new(), Duration::ZERO);
        let prices = provider.fetch_prices().await.unwrap();
        assert!(prices.is_empty());
        assert_eq!(provider.price_of("ETH").await, None);
    }
}
