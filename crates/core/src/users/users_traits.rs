use async_trait::async_trait;

use super::users_model::{NewUser, User};
use crate::errors::Result;

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Creates a new user.
    ///
    /// A duplicate email surfaces as `DatabaseError::UniqueViolation`.
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Looks a user up by (already normalized) email.
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    fn get_by_id(&self, user_id: &str) -> Result<User>;
}

/// Trait defining the contract for User service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Registers a user whose password has already been hashed.
    async fn register_user(&self, new_user: NewUser) -> Result<User>;

    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    fn get_user(&self, user_id: &str) -> Result<User>;
}
