use async_trait::async_trait;

use crate::models::PriceTable;

/// Capability: produce current unit prices in the reference unit.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch the full price table. May legitimately be empty.
    async fn fetch_prices(&self) -> anyhow::Result<PriceTable>;

    /// Price for a single currency, `None` when the provider has no quote.
    /// The pipeline reads a missing quote as price zero.
    async fn price_of(&self, currency: &str) -> Option<f64> {
        match self.fetch_prices().await {
            Ok(prices) if prices.contains(currency) => Some(prices.price_of(currency)),
            _ => None,
        }
    }
}
