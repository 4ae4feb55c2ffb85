//! Asset (holding) domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Upper bound (10^12) for a holding's quantity and prices.
///
/// Keeps `quantity * price` at or below 10^24, well inside `Decimal`'s range.
pub const MAX_HOLDING_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Kind of instrument a holding tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    #[default]
    Stock,
    Crypto,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Crypto => "crypto",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stock" => Ok(AssetType::Stock),
            "crypto" => Ok(AssetType::Crypto),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown asset type '{}', expected 'stock' or 'crypto'",
                other
            )))),
        }
    }
}

/// Domain model representing a single holding inside a wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub wallet_id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    /// Cost basis per unit
    pub purchase_price: Decimal,
    /// Latest known price per unit
    pub current_price: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub wallet_id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
}

impl NewAsset {
    /// Validates the new asset data.
    pub fn validate(&self) -> Result<()> {
        if self.wallet_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "walletId".to_string(),
            )));
        }
        validate_holding(
            &self.symbol,
            &self.name,
            self.quantity,
            self.purchase_price,
            self.current_price,
        )
    }
}

/// Input model for updating an existing asset.
///
/// Updates replace every editable field; there is no partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub id: Option<String>,
    pub wallet_id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub symbol: String,
    pub name: String,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    pub current_price: Decimal,
}

impl AssetUpdate {
    /// Validates the asset update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_deref().map_or(true, |id| id.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Asset ID is required for updates".to_string(),
            )));
        }
        if self.wallet_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "walletId".to_string(),
            )));
        }
        validate_holding(
            &self.symbol,
            &self.name,
            self.quantity,
            self.purchase_price,
            self.current_price,
        )
    }
}

fn validate_holding(
    symbol: &str,
    name: &str,
    quantity: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
) -> Result<()> {
    if symbol.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Symbol is required".to_string(),
        )));
    }
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Name is required".to_string(),
        )));
    }
    for (field, value) in [
        ("quantity", quantity),
        ("purchasePrice", purchase_price),
        ("currentPrice", current_price),
    ] {
        if value <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::NotPositive {
                field: field.to_string(),
                value: value.to_string(),
            }));
        }
        if value > MAX_HOLDING_AMOUNT {
            return Err(Error::Validation(ValidationError::TooLarge {
                field: field.to_string(),
                value: value.to_string(),
                max: MAX_HOLDING_AMOUNT.to_string(),
            }));
        }
    }
    Ok(())
}
