//! Portfolio valuation domain models.
//!
//! These are derived values. They are recomputed from the current holdings on
//! every read and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::Asset;
use crate::portfolio::selection::WalletView;
use crate::wallets::Wallet;

/// Statistics for a single holding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStats {
    pub asset_id: String,
    pub symbol: String,
    pub name: String,
    /// quantity * current price
    pub total_value: Decimal,
    /// quantity * purchase price
    pub total_cost: Decimal,
    pub profit_loss: Decimal,
    /// Zero when the cost basis is zero.
    pub profit_loss_percentage: Decimal,
}

/// Aggregated statistics for a collection of holdings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStats {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_profit_loss: Decimal,
    /// Derived from the combined totals, never averaged from per-asset values.
    pub total_profit_loss_percentage: Decimal,
    /// One entry per input asset, in input order.
    pub asset_stats: Vec<AssetStats>,
}

/// List-view shape of a wallet: the record, its holdings and its statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSummary {
    #[serde(flatten)]
    pub wallet: Wallet,
    pub assets: Vec<Asset>,
    /// Alias of `stats.total_value`
    pub current_amount: Decimal,
    /// Alias of `stats.total_cost`
    pub spent_amount: Decimal,
    /// Alias of `stats.total_profit_loss`
    pub profit_loss: Decimal,
    pub stats: WalletStats,
}

impl WalletView for WalletSummary {
    fn wallet_id(&self) -> &str {
        &self.wallet.id
    }

    fn assets(&self) -> &[Asset] {
        &self.assets
    }
}
