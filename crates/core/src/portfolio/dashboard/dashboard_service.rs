use log::debug;
use std::sync::Arc;

use super::dashboard_model::{Dashboard, DashboardQuery};
use super::dashboard_traits::DashboardServiceTrait;
use crate::assets::Asset;
use crate::errors::Result;
use crate::portfolio::selection::{resolve_active_asset, resolve_active_wallet};
use crate::portfolio::valuation::{compute_wallet_stats, summarize_wallet, WalletSummary};
use crate::wallets::WalletRepositoryTrait;

/// Composes the valuation engine and the selection resolver for one request.
pub struct DashboardService {
    wallet_repository: Arc<dyn WalletRepositoryTrait>,
}

impl DashboardService {
    pub fn new(wallet_repository: Arc<dyn WalletRepositoryTrait>) -> Self {
        Self { wallet_repository }
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard(&self, user_id: &str, query: &DashboardQuery) -> Result<Dashboard> {
        let wallets: Vec<WalletSummary> = self
            .wallet_repository
            .list_for_owner(user_id)?
            .into_iter()
            .map(summarize_wallet)
            .collect();

        let active_wallet = resolve_active_wallet(&wallets, query.wallet.as_deref());
        let asset_to_edit = resolve_active_asset(active_wallet, query.asset_id.as_deref()).cloned();

        let all_assets: Vec<Asset> = wallets
            .iter()
            .flat_map(|summary| summary.assets.iter().cloned())
            .collect();
        let portfolio = compute_wallet_stats(&all_assets);

        debug!(
            "Dashboard for user {}: {} wallets, active {:?}",
            user_id,
            wallets.len(),
            active_wallet.map(|w| w.wallet.id.as_str())
        );

        let active_wallet = active_wallet.cloned();
        Ok(Dashboard {
            active_wallet_id: active_wallet.as_ref().map(|w| w.wallet.id.clone()),
            active_wallet,
            asset_to_edit,
            portfolio,
            wallets,
        })
    }
}
