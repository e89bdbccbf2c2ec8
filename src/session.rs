//! Explicit session lifecycle.
//!
//! The session is an owned value with an explicit init (login) and
//! teardown (logout), not ambient global state. Logging in registers the
//! user's identifier with the [`ApiClient`] so every subsequent request
//! carries it; logging out consumes the session and clears the stored
//! identifier.

use gradeterm_client::{ApiClient, Result};
use gradeterm_models::{LoginRequest, Role, User};
use tracing::info;

/// The authenticated identity for one login/logout span.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
}

impl Session {
    /// Authenticate against the backend and register the returned user's
    /// identifier with the client. On failure nothing is stored.
    pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<Session> {
        let user = client.login(request).await?;
        client.set_session_user(user.user_id);
        info!(user_id = %user.user_id, role = %user.role, "logged in");
        Ok(Session { user })
    }

    /// The role this session's views are routed by.
    pub fn role(&self) -> Role {
        self.user.role
    }

    /// Tear the session down, clearing the client's stored identifier.
    pub fn logout(self, client: &ApiClient) {
        client.clear_session_user();
        info!(user_id = %self.user.user_id, "logged out");
    }
}
