//! Wallet domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::assets::Asset;
use crate::portfolio::selection::WalletView;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a wallet: a named container of holdings owned
/// by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    /// Owner of record. Never transferred.
    pub user_id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
}

impl NewWallet {
    /// Validates the new wallet data.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        validate_wallet_name(&self.name)
    }
}

/// Input model for updating an existing wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletUpdate {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
}

impl WalletUpdate {
    /// Validates the wallet update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_deref().map_or(true, |id| id.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Wallet ID is required for updates".to_string(),
            )));
        }
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        validate_wallet_name(&self.name)
    }
}

fn validate_wallet_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Wallet name is required".to_string(),
        )));
    }
    Ok(())
}

/// A wallet together with its embedded holdings, as read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletWithAssets {
    #[serde(flatten)]
    pub wallet: Wallet,
    pub assets: Vec<Asset>,
}

impl WalletView for WalletWithAssets {
    fn wallet_id(&self) -> &str {
        &self.wallet.id
    }

    fn assets(&self) -> &[Asset] {
        &self.assets
    }
}
