//! View orchestration over providers and renderers

pub mod wallet_view;

// Re-export for convenience
pub use wallet_view::WalletView;
