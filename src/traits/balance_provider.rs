use async_trait::async_trait;

use crate::models::WalletBalance;

/// Capability: produce the current wallet balances.
///
/// Balances and prices arrive from independent sources; the pipeline only
/// ever sees the resolved output of this trait, never the fetch itself.
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Fetch the current balance list. May legitimately be empty.
    async fn fetch_balances(&self) -> anyhow::Result<Vec<WalletBalance>>;
}
