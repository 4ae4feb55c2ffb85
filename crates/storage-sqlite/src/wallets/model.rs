//! Database model for wallets.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use walletfolio_core::wallets::{NewWallet, Wallet};

/// Database model for wallets
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::wallets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WalletDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<WalletDB> for Wallet {
    fn from(db: WalletDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewWallet> for WalletDB {
    fn from(domain: NewWallet) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            user_id: domain.user_id,
            name: domain.name.trim().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
