use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use walletfolio_core::users::{NewUser, User, UserRepositoryTrait};
use walletfolio_core::Result;

use super::model::UserDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;

/// Repository for managing user records in the database
pub struct UserRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let mut user_db: UserDB = new_user.into();
                if user_db.id.is_empty() {
                    user_db.id = Uuid::new_v4().to_string();
                }

                diesel::insert_into(users::table)
                    .values(&user_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(user_db.into())
            })
            .await
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let user = users::table
            .filter(users::email.eq(email))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;

        Ok(user.map(User::from))
    }

    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        let user = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(user.into())
    }
}
