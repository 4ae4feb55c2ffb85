use log::debug;
use std::sync::Arc;

use super::wallets_model::{NewWallet, Wallet, WalletUpdate, WalletWithAssets};
use super::wallets_traits::{WalletRepositoryTrait, WalletServiceTrait};
use crate::errors::{Error, Result};
use crate::portfolio::valuation::{summarize_wallet, WalletSummary};

/// Service for managing wallets
pub struct WalletService {
    repository: Arc<dyn WalletRepositoryTrait>,
}

impl WalletService {
    /// Creates a new WalletService instance
    pub fn new(repository: Arc<dyn WalletRepositoryTrait>) -> Self {
        Self { repository }
    }
}

fn wallet_not_found(wallet_id: &str) -> impl FnOnce(Error) -> Error + '_ {
    move |e| {
        if e.is_not_found() {
            Error::WalletNotFound(wallet_id.to_string())
        } else {
            e
        }
    }
}

#[async_trait::async_trait]
impl WalletServiceTrait for WalletService {
    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet> {
        new_wallet.validate()?;
        debug!("Creating wallet '{}' for user {}", new_wallet.name, new_wallet.user_id);
        self.repository.create(new_wallet).await
    }

    async fn update_wallet(&self, wallet_update: WalletUpdate) -> Result<Wallet> {
        wallet_update.validate()?;
        let wallet_id = wallet_update.id.clone().unwrap_or_default();
        // Ownership check up front so a foreign wallet reads as missing.
        self.get_wallet(&wallet_update.user_id, &wallet_id)?;
        self.repository
            .update(wallet_update)
            .await
            .map_err(wallet_not_found(&wallet_id))
    }

    async fn delete_wallet(&self, user_id: &str, wallet_id: &str) -> Result<()> {
        let deleted = self.repository.delete(user_id, wallet_id).await?;
        if deleted == 0 {
            return Err(Error::WalletNotFound(wallet_id.to_string()));
        }
        debug!("Deleted wallet {} and its assets", wallet_id);
        Ok(())
    }

    fn get_wallet(&self, user_id: &str, wallet_id: &str) -> Result<Wallet> {
        self.repository
            .get_by_id_for_owner(user_id, wallet_id)
            .map_err(wallet_not_found(wallet_id))
    }

    fn list_wallets(&self, user_id: &str) -> Result<Vec<WalletWithAssets>> {
        self.repository.list_for_owner(user_id)
    }

    fn list_wallet_summaries(&self, user_id: &str) -> Result<Vec<WalletSummary>> {
        let wallets = self.repository.list_for_owner(user_id)?;
        Ok(wallets.into_iter().map(summarize_wallet).collect())
    }
}
