//! Demo data providers for balances and prices

pub mod cached_price;
pub mod demo;

// Re-export for convenience
pub use cached_price::CachedPriceProvider;
pub use demo::DemoBalanceProvider;
