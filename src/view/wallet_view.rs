use std::sync::Arc;

use tracing::{debug, info};

use crate::models::DisplayRow;
use crate::pipeline::build_rows;
use crate::traits::{BalanceProvider, PriceProvider, RowRenderer};

/// Orchestrates one display run: fetch balances and prices from their
/// independent sources, run the pure pipeline, hand the rows to every
/// renderer in order.
///
/// The view holds no derived state; each `refresh` recomputes the rows
/// from scratch so either input changing only requires calling it again.
pub struct WalletView {
    balance_provider: Arc<dyn BalanceProvider>,
    price_provider: Arc<dyn PriceProvider>,
    renderers: Vec<Arc<dyn RowRenderer>>,
}

impl WalletView {
    /// Create a view over the two data sources, with no renderers yet
    pub fn new(
        balance_provider: Arc<dyn BalanceProvider>,
        price_provider: Arc<dyn PriceProvider>,
    ) -> Self {
        Self {
            balance_provider,
            price_provider,
            renderers: Vec::new(),
        }
    }

    /// Add a renderer; renderers are invoked in the order added
    pub fn add_renderer(&mut self, renderer: Arc<dyn RowRenderer>) {
        self.renderers.push(renderer);
    }

    /// Fetch both inputs, rebuild the rows, and dispatch them.
    ///
    /// The two fetches run concurrently; a failure in either aborts the
    /// run before any rendering happens. The returned rows are the same
    /// ones every renderer saw.
    pub async fn refresh(&self) -> anyhow::Result<Vec<DisplayRow>> {
        let (balances, prices) = tokio::try_join!(
            self.balance_provider.fetch_balances(),
            self.price_provider.fetch_prices(),
        )?;

        debug!(
            "Refreshing view: {} balances, {} quotes",
            balances.len(),
            prices.len()
        );

        let rows = build_rows(&balances, &prices);
        info!("Pipeline produced {} display rows", rows.len());

        for renderer in &self.renderers {
            renderer.render(&rows).await;
        }

        Ok(rows)
    }
}

impl Clone for WalletView {
    fn clone(&self) -> Self {
        Self {
            balance_provider: self.balance_provider.clone(),
            price_provider: self.price_provider.clone(),
            renderers: self.renderers.clone(),
        }
    }
}
