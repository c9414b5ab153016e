//! Wallet Balance Display Pipeline
//!
//! Classifies wallet balances by chain priority, filters out priced-out
//! and non-positive holdings, orders the survivors, and projects each one
//! into a display row carrying a formatted amount and its value in a
//! reference unit. The core pipeline is pure; balances and prices arrive
//! through independent provider capabilities.

// Public modules - these are the API surface
pub mod chain;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod providers;
pub mod traits;
pub mod view;

// Re-export commonly used items for easier access
pub use chain::{priority_of, UNKNOWN_CHAIN_PRIORITY};
pub use handlers::{ConsoleRenderer, JsonLinesRenderer};
pub use models::{DisplayRow, PriceTable, WalletBalance};
pub use pipeline::{build_rows, project, select_and_order};
pub use providers::{CachedPriceProvider, DemoBalanceProvider};
pub use traits::{BalanceProvider, PriceProvider, RowRenderer};
pub use view::WalletView;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
