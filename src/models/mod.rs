//! Data models for the wallet display pipeline

pub mod balance;
pub mod prices;
pub mod row;

// Re-export for convenience
pub use balance::WalletBalance;
pub use prices::PriceTable;
pub use row::DisplayRow;
