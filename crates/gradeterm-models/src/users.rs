//! User domain models and DTOs.
//!
//! This module contains the user entity as reported by the backend and
//! the DTO used by admins to create new accounts.

use crate::ids::UserId;
use crate::roles::Role;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user in the system.
///
/// This is the backend's user representation, also returned as the login
/// response. Users are immutable from the front-end apart from creation
/// and deletion by admin action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

/// DTO for creating a new user.
///
/// Used by admins only. All fields are required; the view additionally
/// refuses to send the request while any field is blank.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    pub role: Role,
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}
