//! Users module - account holders and their credentials.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{normalize_email, validate_registration, NewUser, User, MIN_PASSWORD_LENGTH};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
