use log::{debug, warn};
use std::sync::Arc;

use super::users_model::{normalize_email, NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service for registering and looking up users
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register_user(&self, mut new_user: NewUser) -> Result<User> {
        new_user.email = normalize_email(&new_user.email);
        new_user.name = new_user
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        new_user.validate()?;

        if self.repository.find_by_email(&new_user.email)?.is_some() {
            warn!("Registration rejected: email already in use");
            return Err(Error::Database(DatabaseError::UniqueViolation(
                "user with that email already exists".to_string(),
            )));
        }

        debug!("Registering user {}", new_user.email);
        self.repository.create(new_user).await
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(&normalize_email(email))
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id)
    }
}
