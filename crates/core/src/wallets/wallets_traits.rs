//! Wallet repository and service traits.
//!
//! These traits define the contract for wallet operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::wallets_model::{NewWallet, Wallet, WalletUpdate, WalletWithAssets};
use crate::errors::Result;
use crate::portfolio::valuation::WalletSummary;

/// Trait defining the contract for Wallet repository operations.
///
/// All reads and writes are scoped by the owner id so one user can never
/// observe or mutate another user's wallets.
#[async_trait]
pub trait WalletRepositoryTrait: Send + Sync {
    /// Creates a new wallet.
    async fn create(&self, new_wallet: NewWallet) -> Result<Wallet>;

    /// Renames an existing wallet owned by `wallet_update.user_id`.
    async fn update(&self, wallet_update: WalletUpdate) -> Result<Wallet>;

    /// Deletes a wallet and its assets.
    ///
    /// The store does not cascade, so implementations delete the assets
    /// explicitly before the wallet, within one transaction. A wallet not
    /// owned by `user_id` is left untouched together with its assets.
    /// Returns the number of deleted wallet records (0 when nothing matched).
    async fn delete(&self, user_id: &str, wallet_id: &str) -> Result<usize>;

    /// Retrieves a wallet by its ID if it belongs to `user_id`.
    fn get_by_id_for_owner(&self, user_id: &str, wallet_id: &str) -> Result<Wallet>;

    /// Lists the owner's wallets in store order, each with its assets.
    fn list_for_owner(&self, user_id: &str) -> Result<Vec<WalletWithAssets>>;
}

/// Trait defining the contract for Wallet service operations.
#[async_trait]
pub trait WalletServiceTrait: Send + Sync {
    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet>;

    async fn update_wallet(&self, wallet_update: WalletUpdate) -> Result<Wallet>;

    /// Deletes a wallet together with all of its assets.
    async fn delete_wallet(&self, user_id: &str, wallet_id: &str) -> Result<()>;

    fn get_wallet(&self, user_id: &str, wallet_id: &str) -> Result<Wallet>;

    fn list_wallets(&self, user_id: &str) -> Result<Vec<WalletWithAssets>>;

    /// Lists the owner's wallets with freshly computed statistics.
    fn list_wallet_summaries(&self, user_id: &str) -> Result<Vec<WalletSummary>>;
}
