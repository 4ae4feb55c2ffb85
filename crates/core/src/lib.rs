//! Walletfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the Walletfolio portfolio
//! tracker: the valuation engine that turns holdings into profit/loss
//! statistics and the resolver that picks the active wallet and asset for a
//! request. It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod assets;
pub mod errors;
pub mod portfolio;
pub mod users;
pub mod wallets;

// Re-export the engine entry points
pub use portfolio::selection::{resolve_active_asset, resolve_active_wallet, WalletView};
pub use portfolio::valuation::{compute_asset_stats, compute_wallet_stats, AssetStats, WalletStats};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
