use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use walletfolio_core::assets::Asset;
use walletfolio_core::wallets::{
    NewWallet, Wallet, WalletRepositoryTrait, WalletUpdate, WalletWithAssets,
};
use walletfolio_core::Result;

use super::model::WalletDB;
use crate::assets::AssetDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{assets, wallets};

/// Repository for managing wallet records in the database
pub struct WalletRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl WalletRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

fn find_for_owner(conn: &mut SqliteConnection, user_id: &str, wallet_id: &str) -> Result<WalletDB> {
    let wallet = wallets::table
        .filter(wallets::id.eq(wallet_id))
        .filter(wallets::user_id.eq(user_id))
        .select(WalletDB::as_select())
        .first::<WalletDB>(conn)
        .map_err(StorageError::from)?;
    Ok(wallet)
}

#[async_trait]
impl WalletRepositoryTrait for WalletRepository {
    async fn create(&self, new_wallet: NewWallet) -> Result<Wallet> {
        new_wallet.validate()?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Wallet> {
                let mut wallet_db: WalletDB = new_wallet.into();
                if wallet_db.id.is_empty() {
                    wallet_db.id = Uuid::new_v4().to_string();
                }

                diesel::insert_into(wallets::table)
                    .values(&wallet_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(wallet_db.into())
            })
            .await
    }

    async fn update(&self, wallet_update: WalletUpdate) -> Result<Wallet> {
        wallet_update.validate()?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Wallet> {
                let wallet_id = wallet_update.id.unwrap_or_default();
                let mut wallet_db = find_for_owner(conn, &wallet_update.user_id, &wallet_id)?;

                wallet_db.name = wallet_update.name.trim().to_string();
                wallet_db.updated_at = chrono::Utc::now().naive_utc();

                diesel::update(wallets::table.find(&wallet_db.id))
                    .set(&wallet_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(wallet_db.into())
            })
            .await
    }

    async fn delete(&self, user_id: &str, wallet_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let wallet_id = wallet_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                // Sole ownership check for deletes; runs inside the transaction.
                let owned = wallets::table
                    .filter(wallets::id.eq(&wallet_id))
                    .filter(wallets::user_id.eq(&user_id))
                    .count()
                    .get_result::<i64>(conn)
                    .map_err(StorageError::from)?;
                if owned == 0 {
                    return Ok(0);
                }

                // Children first: the schema does not cascade.
                let removed_assets =
                    diesel::delete(assets::table.filter(assets::wallet_id.eq(&wallet_id)))
                        .execute(conn)
                        .map_err(StorageError::from)?;

                let removed = diesel::delete(
                    wallets::table
                        .filter(wallets::id.eq(&wallet_id))
                        .filter(wallets::user_id.eq(&user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;

                debug!(
                    "Deleted wallet {} together with {} asset(s)",
                    wallet_id, removed_assets
                );
                Ok(removed)
            })
            .await
    }

    fn get_by_id_for_owner(&self, user_id: &str, wallet_id: &str) -> Result<Wallet> {
        let mut conn = get_connection(&self.pool)?;
        Ok(find_for_owner(&mut conn, user_id, wallet_id)?.into())
    }

    fn list_for_owner(&self, user_id: &str) -> Result<Vec<WalletWithAssets>> {
        let mut conn = get_connection(&self.pool)?;

        let wallet_rows = wallets::table
            .filter(wallets::user_id.eq(user_id))
            .order((wallets::created_at.asc(), wallets::id.asc()))
            .select(WalletDB::as_select())
            .load::<WalletDB>(&mut conn)
            .map_err(StorageError::from)?;

        let wallet_ids: Vec<&str> = wallet_rows.iter().map(|w| w.id.as_str()).collect();
        let asset_rows = assets::table
            .filter(assets::wallet_id.eq_any(wallet_ids))
            .order((assets::created_at.asc(), assets::id.asc()))
            .select(AssetDB::as_select())
            .load::<AssetDB>(&mut conn)
            .map_err(StorageError::from)?;

        let mut assets_by_wallet: HashMap<String, Vec<Asset>> = HashMap::new();
        for asset_db in asset_rows {
            let asset = Asset::try_from(asset_db)?;
            assets_by_wallet
                .entry(asset.wallet_id.clone())
                .or_default()
                .push(asset);
        }

        Ok(wallet_rows
            .into_iter()
            .map(|wallet_db| {
                let assets = assets_by_wallet.remove(&wallet_db.id).unwrap_or_default();
                WalletWithAssets {
                    wallet: wallet_db.into(),
                    assets,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetRepository;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use crate::users::UserRepository;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;
    use walletfolio_core::assets::{AssetRepositoryTrait, AssetType, NewAsset};
    use walletfolio_core::users::{NewUser, UserRepositoryTrait};

    struct TestStore {
        wallets: WalletRepository,
        assets: AssetRepository,
        users: UserRepository,
        _temp_dir: tempfile::TempDir,
    }

    async fn create_test_store() -> TestStore {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        TestStore {
            wallets: WalletRepository::new(Arc::clone(&pool), writer.clone()),
            assets: AssetRepository::new(Arc::clone(&pool), writer.clone()),
            users: UserRepository::new(Arc::clone(&pool), writer),
            _temp_dir: temp_dir,
        }
    }

    async fn create_user(store: &TestStore, id: &str) {
        store
            .users
            .create(NewUser {
                id: Some(id.to_string()),
                name: None,
                email: format!("{}@example.com", id),
                password_hash: "$argon2id$stub".to_string(),
            })
            .await
            .expect("Failed to create user");
    }

    async fn create_wallet(store: &TestStore, user_id: &str, id: &str, name: &str) -> Wallet {
        store
            .wallets
            .create(NewWallet {
                id: Some(id.to_string()),
                user_id: user_id.to_string(),
                name: name.to_string(),
            })
            .await
            .expect("Failed to create wallet")
    }

    fn holding(wallet_id: &str, symbol: &str) -> NewAsset {
        NewAsset {
            id: None,
            wallet_id: wallet_id.to_string(),
            asset_type: AssetType::Stock,
            symbol: symbol.to_string(),
            name: format!("{} Inc.", symbol),
            quantity: dec!(10),
            purchase_price: dec!(100.25),
            current_price: dec!(150.125),
        }
    }

    #[tokio::test]
    async fn test_list_for_owner_groups_assets_in_store_order() {
        let store = create_test_store().await;
        create_user(&store, "alice").await;
        create_user(&store, "bob").await;
        create_wallet(&store, "alice", "wallet-a", "Brokerage").await;
        create_wallet(&store, "alice", "wallet-b", "Crypto").await;
        create_wallet(&store, "bob", "wallet-c", "Bob's").await;

        store.assets.create(holding("wallet-a", "AAPL")).await.unwrap();
        store.assets.create(holding("wallet-a", "MSFT")).await.unwrap();

        let listed = store.wallets.list_for_owner("alice").unwrap();
        let ids: Vec<&str> = listed.iter().map(|w| w.wallet.id.as_str()).collect();
        assert_eq!(ids, vec!["wallet-a", "wallet-b"]);

        let symbols: Vec<&str> = listed[0].assets.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT"]);
        assert!(listed[1].assets.is_empty());

        // Amounts survive the TEXT round trip exactly.
        assert_eq!(listed[0].assets[0].purchase_price, dec!(100.25));
        assert_eq!(listed[0].assets[0].current_price, dec!(150.125));
    }

    #[tokio::test]
    async fn test_delete_removes_assets_before_wallet() {
        let store = create_test_store().await;
        create_user(&store, "alice").await;
        create_wallet(&store, "alice", "wallet-a", "Brokerage").await;
        store.assets.create(holding("wallet-a", "AAPL")).await.unwrap();
        store.assets.create(holding("wallet-a", "MSFT")).await.unwrap();

        let removed = store.wallets.delete("alice", "wallet-a").await.unwrap();
        assert_eq!(removed, 1);
        assert!(store.wallets.list_for_owner("alice").unwrap().is_empty());
        assert!(store.assets.list_by_wallet("wallet-a").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_foreign_owner_cannot_touch_wallet() {
        let store = create_test_store().await;
        create_user(&store, "alice").await;
        create_user(&store, "bob").await;
        create_wallet(&store, "alice", "wallet-a", "Brokerage").await;
        store.assets.create(holding("wallet-a", "AAPL")).await.unwrap();

        assert!(store
            .wallets
            .get_by_id_for_owner("bob", "wallet-a")
            .unwrap_err()
            .is_not_found());

        let renamed = store
            .wallets
            .update(WalletUpdate {
                id: Some("wallet-a".to_string()),
                user_id: "bob".to_string(),
                name: "Hijacked".to_string(),
            })
            .await;
        assert!(renamed.unwrap_err().is_not_found());

        assert_eq!(store.wallets.delete("bob", "wallet-a").await.unwrap(), 0);
        assert_eq!(store.assets.list_by_wallet("wallet-a").unwrap().len(), 1);

        let wallet = store.wallets.get_by_id_for_owner("alice", "wallet-a").unwrap();
        assert_eq!(wallet.name, "Brokerage");
    }

    #[tokio::test]
    async fn test_update_renames_wallet() {
        let store = create_test_store().await;
        create_user(&store, "alice").await;
        let created = create_wallet(&store, "alice", "wallet-a", "Brokerage").await;

        let updated = store
            .wallets
            .update(WalletUpdate {
                id: Some("wallet-a".to_string()),
                user_id: "alice".to_string(),
                name: "  Retirement ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Retirement");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_asset_update_replaces_fields_within_wallet() {
        let store = create_test_store().await;
        create_user(&store, "alice").await;
        create_wallet(&store, "alice", "wallet-a", "Brokerage").await;
        create_wallet(&store, "alice", "wallet-b", "Crypto").await;
        let asset = store.assets.create(holding("wallet-a", "AAPL")).await.unwrap();

        let update = walletfolio_core::assets::AssetUpdate {
            id: Some(asset.id.clone()),
            wallet_id: "wallet-a".to_string(),
            asset_type: AssetType::Crypto,
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            quantity: dec!(0.5),
            purchase_price: dec!(30000),
            current_price: dec!(45000),
        };
        let updated = store.assets.update(update.clone()).await.unwrap();
        assert_eq!(updated.symbol, "BTC");
        assert_eq!(updated.asset_type, AssetType::Crypto);
        assert_eq!(updated.quantity, dec!(0.5));

        let mut wrong_wallet = update;
        wrong_wallet.wallet_id = "wallet-b".to_string();
        assert!(store
            .assets
            .update(wrong_wallet)
            .await
            .unwrap_err()
            .is_not_found());
        assert_eq!(store.assets.delete("wallet-b", &asset.id).await.unwrap(), 0);
        assert_eq!(store.assets.delete("wallet-a", &asset.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_unique_violation() {
        let store = create_test_store().await;
        create_user(&store, "alice").await;

        let err = store
            .users
            .create(NewUser {
                id: None,
                name: Some("Other Alice".to_string()),
                email: "alice@example.com".to_string(),
                password_hash: "$argon2id$stub".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            walletfolio_core::Error::Database(walletfolio_core::errors::DatabaseError::UniqueViolation(_))
        ));

        let found = store.users.find_by_email("alice@example.com").unwrap().unwrap();
        assert_eq!(found.id, "alice");
        assert!(store.users.find_by_email("nobody@example.com").unwrap().is_none());
    }
}
