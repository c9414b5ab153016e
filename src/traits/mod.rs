//! Boundary capabilities: data sources in, renderers out

pub mod balance_provider;
pub mod price_provider;
pub mod row_renderer;

// Re-export for convenience
pub use balance_provider::BalanceProvider;
pub use price_provider::PriceProvider;
pub use row_renderer::RowRenderer;
