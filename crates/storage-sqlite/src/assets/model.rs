//! Database model for assets.

use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use walletfolio_core::assets::{Asset, AssetType, AssetUpdate, NewAsset};
use walletfolio_core::Error;

use crate::errors::StorageError;

/// Database model for assets. Amounts are stored as TEXT so no precision is
/// lost on the way through SQLite.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: String,
    pub wallet_id: String,
    pub asset_type: String,
    pub symbol: String,
    pub name: String,
    pub quantity: String,
    pub purchase_price: String,
    pub current_price: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Parses a stored amount. Accepts plain and scientific notation.
fn parse_stored_decimal(value: &str, field_name: &str) -> Result<Decimal, StorageError> {
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|e| {
            log::error!("Failed to parse {} '{}' as decimal: {}", field_name, value, e);
            StorageError::CorruptValue(format!("{} '{}': {}", field_name, value, e))
        })
}

impl TryFrom<AssetDB> for Asset {
    type Error = Error;

    fn try_from(db: AssetDB) -> Result<Self, Self::Error> {
        let asset_type = AssetType::from_str(&db.asset_type).map_err(|_| {
            Error::from(StorageError::CorruptValue(format!(
                "asset_type '{}'",
                db.asset_type
            )))
        })?;

        Ok(Self {
            quantity: parse_stored_decimal(&db.quantity, "quantity")?,
            purchase_price: parse_stored_decimal(&db.purchase_price, "purchase_price")?,
            current_price: parse_stored_decimal(&db.current_price, "current_price")?,
            id: db.id,
            wallet_id: db.wallet_id,
            asset_type,
            symbol: db.symbol,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewAsset> for AssetDB {
    fn from(domain: NewAsset) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            wallet_id: domain.wallet_id,
            asset_type: domain.asset_type.as_str().to_string(),
            symbol: domain.symbol.trim().to_string(),
            name: domain.name.trim().to_string(),
            quantity: domain.quantity.to_string(),
            purchase_price: domain.purchase_price.to_string(),
            current_price: domain.current_price.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<AssetUpdate> for AssetDB {
    fn from(domain: AssetUpdate) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            wallet_id: domain.wallet_id,
            asset_type: domain.asset_type.as_str().to_string(),
            symbol: domain.symbol.trim().to_string(),
            name: domain.name.trim().to_string(),
            quantity: domain.quantity.to_string(),
            purchase_price: domain.purchase_price.to_string(),
            current_price: domain.current_price.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stored(quantity: &str, asset_type: &str) -> AssetDB {
        AssetDB {
            id: "a1".to_string(),
            wallet_id: "w1".to_string(),
            asset_type: asset_type.to_string(),
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            quantity: quantity.to_string(),
            purchase_price: "30000".to_string(),
            current_price: "45000.50".to_string(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_parses_stored_amounts() {
        let asset = Asset::try_from(stored("0.5", "crypto")).unwrap();
        assert_eq!(asset.asset_type, AssetType::Crypto);
        assert_eq!(asset.quantity, dec!(0.5));
        assert_eq!(asset.current_price, dec!(45000.50));
    }

    #[test]
    fn test_accepts_scientific_notation() {
        let asset = Asset::try_from(stored("1e-3", "stock")).unwrap();
        assert_eq!(asset.quantity, dec!(0.001));
    }

    #[test]
    fn test_rejects_corrupt_amount() {
        assert!(Asset::try_from(stored("lots", "stock")).is_err());
    }

    #[test]
    fn test_rejects_unknown_type() {
        assert!(Asset::try_from(stored("1", "bond")).is_err());
    }
}
