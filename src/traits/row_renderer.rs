use async_trait::async_trait;

use crate::models::DisplayRow;

/// Consumer of display rows. Renderers receive rows in pipeline order and
/// must not reorder them.
#[async_trait]
pub trait RowRenderer: Send + Sync {
    /// Render one batch of rows. An empty batch is a valid steady state
    /// (no eligible balances), not an error.
    async fn render(&self, rows: &[DisplayRow]);
}
