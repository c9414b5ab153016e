use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::models::DisplayRow;
use crate::traits::row_renderer::RowRenderer;

/// Writes one JSON object per row to stdout, for piping into other tools.
pub struct JsonLinesRenderer;

impl JsonLinesRenderer {
    /// Create a new JSON-lines renderer
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonLinesRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RowRenderer for JsonLinesRenderer {
    async fn render(&self, rows: &[DisplayRow]) {
        let mut stdout = tokio::io::stdout();
        for row in rows {
            let line = match serde_json::to_string(row) {
                Ok(json) => json,
                Err(e) => {
                    warn!("Failed to serialize row for {}: {}", row.currency, e);
                    continue;
                }
            };
            if let Err(e) = stdout.write_all(line.as_bytes()).await {
                warn!("Failed to write row to stdout: {}", e);
                return;
            }
            if let Err(e) = stdout.write_all(b"\n").await {
                warn!("Failed to write row to stdout: {}", e);
                return;
            }
        }
        if let Err(e) = stdout.flush().await {
            warn!("Failed to flush stdout: {}", e);
        }
    }
}
