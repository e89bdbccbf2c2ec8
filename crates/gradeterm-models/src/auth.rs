//! Authentication domain models and DTOs.
//!
//! The backend's login endpoint takes a username and password and, on
//! success, returns the authenticated [`User`](crate::users::User)
//! directly; there is no token.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request with username and password.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}
