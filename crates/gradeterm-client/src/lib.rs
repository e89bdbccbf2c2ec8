//! # Gradeterm Client
//!
//! Typed HTTP client for the Grade Entry System backend.
//!
//! All outbound requests share a fixed base URL and JSON content type.
//! Once a user has logged in, their identifier is attached to every
//! request as a `user_id` query parameter so the backend can identify
//! the caller; this is the client's only notion of a session.
//!
//! # Example
//!
//! ```ignore
//! use gradeterm_client::ApiClient;
//! use gradeterm_models::LoginRequest;
//!
//! let client = ApiClient::new("http://localhost:8000/api");
//! let user = client.login(&LoginRequest {
//!     username: "teacher1".into(),
//!     password: "teacher123".into(),
//! }).await?;
//! client.set_session_user(user.user_id);
//! let students = client.students().await?;
//! ```

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, Result};
