//! Generic backend response shapes.

use serde::{Deserialize, Serialize};

/// Message response returned by the backend's mutating endpoints:
/// subject and user deletion, user-facing grade updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
