use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing::level_filters::LevelFilter;

use walletview::handlers::{ConsoleRenderer, JsonLinesRenderer};
use walletview::providers::{CachedPriceProvider, DemoBalanceProvider};
use walletview::view::WalletView;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(LevelFilter::INFO)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(async {
        // Simulated latency for both data sources, as if they were remote
        let fetch_delay_ms: u64 = std::env::var("FETCH_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(500);

        let output_json = std::env::var("OUTPUT_JSON")
            .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        info!("Initializing wallet view...");
        info!("Fetch delay: {}ms", fetch_delay_ms);

        let fetch_delay = Duration::from_millis(fetch_delay_ms);
        let mut view = WalletView::new(
            Arc::new(DemoBalanceProvider::with_demo_portfolio(fetch_delay)),
            Arc::new(CachedPriceProvider::with_demo_quotes(fetch_delay)),
        );

        view.add_renderer(Arc::new(ConsoleRenderer::new()));
        if output_json {
            view.add_renderer(Arc::new(JsonLinesRenderer::new()));
        }

        let rows = view.refresh().await?;
        info!("Done: {} rows displayed", rows.len());

        Ok(())
    })
}
