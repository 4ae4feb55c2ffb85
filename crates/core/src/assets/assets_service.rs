use log::debug;
use std::sync::Arc;

use super::assets_model::{Asset, AssetUpdate, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::{Error, Result};
use crate::wallets::WalletRepositoryTrait;

/// Service for managing the holdings of a wallet.
///
/// Every operation first checks that the parent wallet belongs to the caller.
pub struct AssetService {
    repository: Arc<dyn AssetRepositoryTrait>,
    wallet_repository: Arc<dyn WalletRepositoryTrait>,
}

impl AssetService {
    /// Creates a new AssetService instance
    pub fn new(
        repository: Arc<dyn AssetRepositoryTrait>,
        wallet_repository: Arc<dyn WalletRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            wallet_repository,
        }
    }

    fn ensure_wallet_owned(&self, user_id: &str, wallet_id: &str) -> Result<()> {
        self.wallet_repository
            .get_by_id_for_owner(user_id, wallet_id)
            .map(|_| ())
            .map_err(|e| {
                if e.is_not_found() {
                    Error::WalletNotFound(wallet_id.to_string())
                } else {
                    e
                }
            })
    }
}

fn asset_not_found(asset_id: &str) -> impl FnOnce(Error) -> Error + '_ {
    move |e| {
        if e.is_not_found() {
            Error::AssetNotFound(asset_id.to_string())
        } else {
            e
        }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    async fn create_asset(&self, user_id: &str, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;
        self.ensure_wallet_owned(user_id, &new_asset.wallet_id)?;
        debug!(
            "Creating {} asset {} in wallet {}",
            new_asset.asset_type, new_asset.symbol, new_asset.wallet_id
        );
        self.repository.create(new_asset).await
    }

    async fn update_asset(&self, user_id: &str, asset_update: AssetUpdate) -> Result<Asset> {
        asset_update.validate()?;
        self.ensure_wallet_owned(user_id, &asset_update.wallet_id)?;
        let asset_id = asset_update.id.clone().unwrap_or_default();
        self.repository
            .update(asset_update)
            .await
            .map_err(asset_not_found(&asset_id))
    }

    async fn delete_asset(&self, user_id: &str, wallet_id: &str, asset_id: &str) -> Result<()> {
        self.ensure_wallet_owned(user_id, wallet_id)?;
        let deleted = self.repository.delete(wallet_id, asset_id).await?;
        if deleted == 0 {
            return Err(Error::AssetNotFound(asset_id.to_string()));
        }
        debug!("Deleted asset {} from wallet {}", asset_id, wallet_id);
        Ok(())
    }

    fn get_asset(&self, user_id: &str, wallet_id: &str, asset_id: &str) -> Result<Asset> {
        self.ensure_wallet_owned(user_id, wallet_id)?;
        self.repository
            .get_by_id(wallet_id, asset_id)
            .map_err(asset_not_found(asset_id))
    }

    fn list_assets(&self, user_id: &str, wallet_id: &str) -> Result<Vec<Asset>> {
        self.ensure_wallet_owned(user_id, wallet_id)?;
        self.repository.list_by_wallet(wallet_id)
    }
}
