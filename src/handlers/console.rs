use async_trait::async_trait;
use tracing::info;

use crate::models::DisplayRow;
use crate::traits::row_renderer::RowRenderer;

/// Renders rows as an aligned table through the log output.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Create a new console renderer
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RowRenderer for ConsoleRenderer {
    async fn render(&self, rows: &[DisplayRow]) {
        info!("{}", "-".repeat(60));
        info!("WALLET BALANCES");
        info!("{}", "-".repeat(60));

        if rows.is_empty() {
            info!("No balances to display");
            info!("{}", "-".repeat(60));
            return;
        }

        for row in rows {
            info!(
                "{:<8} {:<12} {:>14}  ${:.2}",
                row.currency, row.chain, row.formatted_amount, row.reference_value
            );
        }

        let total: f64 = rows.iter().map(|r| r.reference_value).sum();
        info!("{}", "-".repeat(60));
        info!("Total: ${:.2} across {} balances", total, rows.len());
    }
}
