//! Asset repository and service traits.

use async_trait::async_trait;

use super::assets_model::{Asset, AssetUpdate, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset repository operations.
///
/// Every lookup is scoped to a parent wallet. Ownership of that wallet is
/// checked by the service before the repository is called.
#[async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset>;

    /// Replaces every editable field of an existing asset.
    async fn update(&self, asset_update: AssetUpdate) -> Result<Asset>;

    /// Deletes an asset from a wallet.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, wallet_id: &str, asset_id: &str) -> Result<usize>;

    fn get_by_id(&self, wallet_id: &str, asset_id: &str) -> Result<Asset>;

    fn list_by_wallet(&self, wallet_id: &str) -> Result<Vec<Asset>>;
}

/// Trait defining the contract for Asset service operations.
#[async_trait]
pub trait AssetServiceTrait: Send + Sync {
    async fn create_asset(&self, user_id: &str, new_asset: NewAsset) -> Result<Asset>;

    async fn update_asset(&self, user_id: &str, asset_update: AssetUpdate) -> Result<Asset>;

    async fn delete_asset(&self, user_id: &str, wallet_id: &str, asset_id: &str) -> Result<()>;

    fn get_asset(&self, user_id: &str, wallet_id: &str, asset_id: &str) -> Result<Asset>;

    fn list_assets(&self, user_id: &str, wallet_id: &str) -> Result<Vec<Asset>>;
}
