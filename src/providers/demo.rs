use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::models::WalletBalance;
use crate::traits::balance_provider::BalanceProvider;

/// Balance provider serving a fixed list after a simulated fetch delay.
///
/// Stands in for a real wallet backend so the pipeline can be exercised
/// without network access. The delay mimics balances arriving some time
/// after startup; with zero delay it resolves immediately.
pub struct DemoBalanceProvider {
    balances: Vec<WalletBalance>,
    fetch_delay: Duration,
}

impl DemoBalanceProvider {
    /// Create a provider serving the given balances after `fetch_delay`
    pub fn new(balances: Vec<WalletBalance>, fetch_delay: Duration) -> Self {
        Self {
            balances,
            fetch_delay,
        }
    }

    /// The stock demo portfolio: a mix of displayable, zero-amount and
    /// unknown-chain holdings.
    pub fn with_demo_portfolio(fetch_delay: Duration) -> Self {
        Self::new(
            vec![
                WalletBalance::new("OSMO", 100.0, "Osmosis"),
                WalletBalance::new("ETH", 2.5, "Ethereum"),
                WalletBalance::new("ARB", 500.0, "Arbitrum"),
                WalletBalance::new("ZIL", 10000.0, "Zilliqa"),
                WalletBalance::new("NEO", 0.0, "Neo"),
                WalletBalance::new("Unknown", 50.0, "UnknownChain"),
            ],
            fetch_delay,
        )
    }
}

#[async_trait]
impl BalanceProvider for DemoBalanceProvider {
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>> {
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        debug!("Serving {} demo balances", self.balances.len());
        Ok(self.balances.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_configured_balances() {
        let provider = DemoBalanceProvider::new(
            vec![WalletBalance::new("ETH", 2.5, "Ethereum")],
            Duration::ZERO,
        );
        let balances = provider.fetch_balances().await.unwrap();
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].currency, "ETH");
    }

    #[tokio::test]
    async fn test_demo_portfolio_contents() {
        let provider = DemoBalanceProvider::with_demo_portfolio(Duration::ZERO);
        let balances = provider.fetch_balances().await.unwrap();
        assert_eq!(balances.len(), 6);
        assert!(balances.iter().any(|b| b.chain == "UnknownChain"));
        assert!(balances.iter().any(|b| b.amount == 0.0));
    }

    #[tokio::test]
    async fn test_empty_balance_list_is_valid() {
        let provider = DemoBalanceProvider::new(vec![], Duration::ZERO);
        assert!(provider.fetch_balances().await.unwrap().is_empty());
    }
}
