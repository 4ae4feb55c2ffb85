//! Database model for users.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use walletfolio_core::users::{NewUser, User};

/// Database model for users
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            password_hash: db.password_hash,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewUser> for UserDB {
    fn from(domain: NewUser) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            email: domain.email,
            password_hash: domain.password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
