//! Dashboard models.

use serde::{Deserialize, Serialize};

use crate::assets::Asset;
use crate::portfolio::valuation::{WalletStats, WalletSummary};

/// Raw selection parameters as supplied by the presentation layer.
///
/// Both ids are free text and may reference records that do not exist or
/// belong to someone else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub wallet: Option<String>,
    pub asset_id: Option<String>,
}

/// Everything needed to render an owner's portfolio overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub wallets: Vec<WalletSummary>,
    pub active_wallet_id: Option<String>,
    pub active_wallet: Option<WalletSummary>,
    /// Asset pre-filled in the edit form, if the request named one that
    /// exists in the active wallet.
    pub asset_to_edit: Option<Asset>,
    /// Statistics over every holding of every wallet of the owner.
    pub portfolio: WalletStats,
}
