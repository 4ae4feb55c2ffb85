use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use walletfolio_core::{
    assets as core_assets, portfolio::dashboard as core_dashboard,
    portfolio::valuation as core_valuation, users as core_users, wallets as core_wallets,
};

// ===================== Auth =====================

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
}

impl From<core_users::User> for UserProfile {
    fn from(u: core_users::User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RegisterResponse {
    pub user: UserProfile,
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// ===================== Wallets =====================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<core_wallets::Wallet> for Wallet {
    fn from(w: core_wallets::Wallet) -> Self {
        Self {
            id: w.id,
            user_id: w.user_id,
            name: w.name,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

/// Body of wallet create and rename requests.
#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct WalletPayload {
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WalletSummary {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub assets: Vec<Asset>,
    pub current_amount: Decimal,
    pub spent_amount: Decimal,
    pub profit_loss: Decimal,
    pub stats: WalletStats,
}

impl From<core_valuation::WalletSummary> for WalletSummary {
    fn from(s: core_valuation::WalletSummary) -> Self {
        Self {
            id: s.wallet.id,
            user_id: s.wallet.user_id,
            name: s.wallet.name,
            created_at: s.wallet.created_at,
            updated_at: s.wallet.updated_at,
            assets: s.assets.into_iter().map(Asset::from).collect(),
            current_amount: s.current_amount,
            spent_amount: s.spent_amount,
            profit_loss: s.profit_loss,
            stats: s.stats.into(),
        }
    }
}

// ===================== Assets =====================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub wallet_id: String,
    /// `stock` or `crypto`
    #[serde(rename = "type")]
    pub asset_type: String,
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<core_assets::Asset> for Asset {
    fn from(a: core_assets::Asset) -> Self {
        Self {
            id: a.id,
            wallet_id: a.wallet_id,
            asset_type: a.asset_type.as_str().to_string(),
            symbol: a.symbol,
            name: a.name,
            quantity: a.quantity,
            purchase_price: a.purchase_price,
            current_price: a.current_price,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Body of asset create and replace requests. The wallet comes from the path.
#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetPayload {
    /// `stock` or `crypto`
    #[serde(rename = "type")]
    pub asset_type: String,
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
}

impl AssetPayload {
    pub fn into_new_asset(self, wallet_id: String) -> walletfolio_core::Result<core_assets::NewAsset> {
        Ok(core_assets::NewAsset {
            id: None,
            wallet_id,
            asset_type: self.asset_type.parse()?,
            symbol: self.symbol,
            name: self.name,
            quantity: self.quantity,
            purchase_price: self.purchase_price,
            current_price: self.current_price,
        })
    }

    pub fn into_asset_update(
        self,
        wallet_id: String,
        asset_id: String,
    ) -> walletfolio_core::Result<core_assets::AssetUpdate> {
        Ok(core_assets::AssetUpdate {
            id: Some(asset_id),
            wallet_id,
            asset_type: self.asset_type.parse()?,
            symbol: self.symbol,
            name: self.name,
            quantity: self.quantity,
            purchase_price: self.purchase_price,
            current_price: self.current_price,
        })
    }
}

// ===================== Valuation =====================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetStats {
    pub asset_id: String,
    pub symbol: String,
    pub name: String,
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percentage: Decimal,
}

impl From<core_valuation::AssetStats> for AssetStats {
    fn from(s: core_valuation::AssetStats) -> Self {
        Self {
            asset_id: s.asset_id,
            symbol: s.symbol,
            name: s.name,
            total_value: s.total_value,
            total_cost: s.total_cost,
            profit_loss: s.profit_loss,
            profit_loss_percentage: s.profit_loss_percentage,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WalletStats {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_profit_loss: Decimal,
    pub total_profit_loss_percentage: Decimal,
    pub asset_stats: Vec<AssetStats>,
}

impl From<core_valuation::WalletStats> for WalletStats {
    fn from(s: core_valuation::WalletStats) -> Self {
        Self {
            total_value: s.total_value,
            total_cost: s.total_cost,
            total_profit_loss: s.total_profit_loss,
            total_profit_loss_percentage: s.total_profit_loss_percentage,
            asset_stats: s.asset_stats.into_iter().map(AssetStats::from).collect(),
        }
    }
}

// ===================== Dashboard =====================

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DashboardParams {
    /// Requested wallet id; unknown ids fall back to the first wallet.
    pub wallet: Option<String>,
    /// Asset to edit; must belong to the active wallet.
    pub asset_id: Option<String>,
}

impl From<DashboardParams> for core_dashboard::DashboardQuery {
    fn from(p: DashboardParams) -> Self {
        Self {
            wallet: p.wallet,
            asset_id: p.asset_id,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub wallets: Vec<WalletSummary>,
    pub active_wallet_id: Option<String>,
    pub active_wallet: Option<WalletSummary>,
    pub asset_to_edit: Option<Asset>,
    pub portfolio: WalletStats,
}

impl From<core_dashboard::Dashboard> for Dashboard {
    fn from(d: core_dashboard::Dashboard) -> Self {
        Self {
            wallets: d.wallets.into_iter().map(WalletSummary::from).collect(),
            active_wallet_id: d.active_wallet_id,
            active_wallet: d.active_wallet.map(WalletSummary::from),
            asset_to_edit: d.asset_to_edit.map(Asset::from),
            portfolio: d.portfolio.into(),
        }
    }
}
