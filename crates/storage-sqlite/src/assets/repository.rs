use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use walletfolio_core::assets::{Asset, AssetRepositoryTrait, AssetUpdate, NewAsset};
use walletfolio_core::Result;

use super::model::AssetDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::assets;

/// Repository for managing asset (holding) records in the database
pub struct AssetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AssetRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

/// Loads one asset scoped to its wallet.
pub(crate) fn find_in_wallet(
    conn: &mut SqliteConnection,
    wallet_id: &str,
    asset_id: &str,
) -> Result<Asset> {
    let asset_db = assets::table
        .filter(assets::id.eq(asset_id))
        .filter(assets::wallet_id.eq(wallet_id))
        .select(AssetDB::as_select())
        .first::<AssetDB>(conn)
        .map_err(StorageError::from)?;

    Asset::try_from(asset_db)
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let mut asset_db: AssetDB = new_asset.into();
                if asset_db.id.is_empty() {
                    asset_db.id = Uuid::new_v4().to_string();
                }

                diesel::insert_into(assets::table)
                    .values(&asset_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Asset::try_from(asset_db)
            })
            .await
    }

    async fn update(&self, asset_update: AssetUpdate) -> Result<Asset> {
        asset_update.validate()?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let mut asset_db: AssetDB = asset_update.into();

                let existing = find_in_wallet(conn, &asset_db.wallet_id, &asset_db.id)?;
                asset_db.created_at = existing.created_at;
                asset_db.updated_at = chrono::Utc::now().naive_utc();

                diesel::update(
                    assets::table
                        .filter(assets::id.eq(&asset_db.id))
                        .filter(assets::wallet_id.eq(&asset_db.wallet_id)),
                )
                .set(&asset_db)
                .execute(conn)
                .map_err(StorageError::from)?;

                Asset::try_from(asset_db)
            })
            .await
    }

    async fn delete(&self, wallet_id: &str, asset_id: &str) -> Result<usize> {
        let wallet_id = wallet_id.to_string();
        let asset_id = asset_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let affected = diesel::delete(
                    assets::table
                        .filter(assets::id.eq(&asset_id))
                        .filter(assets::wallet_id.eq(&wallet_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(affected)
            })
            .await
    }

    fn get_by_id(&self, wallet_id: &str, asset_id: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;
        find_in_wallet(&mut conn, wallet_id, asset_id)
    }

    fn list_by_wallet(&self, wallet_id: &str) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        assets::table
            .filter(assets::wallet_id.eq(wallet_id))
            .order((assets::created_at.asc(), assets::id.asc()))
            .select(AssetDB::as_select())
            .load::<AssetDB>(&mut conn)
            .map_err(StorageError::from)?
            .into_iter()
            .map(Asset::try_from)
            .collect()
    }
}
