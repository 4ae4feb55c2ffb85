//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Domain model representing a registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    /// Always stored lowercased.
    pub email: String,
    /// PHC-formatted password hash. Never sent to clients.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;
        if self.password_hash.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "passwordHash".to_string(),
            )));
        }
        Ok(())
    }
}

/// Trims and lowercases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates raw registration input before the password is hashed.
pub fn validate_registration(name: Option<&str>, email: &str, password: &str) -> Result<()> {
    if let Some(name) = name {
        if name.len() > 200 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Name is too long".to_string(),
            )));
        }
    }
    validate_email(&normalize_email(email))?;
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ))));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid email address '{}'",
            email
        ))));
    }
    Ok(())
}
