//! Response DTOs.
//!
//! Responses are bare JSON objects (no envelope) to stay wire-compatible
//! with the clients of the original service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitrine_entity::user::User;

/// Login response (`POST /login`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed session token.
    pub token: String,
    /// Admin flag, echoed for client-side routing.
    pub is_admin: bool,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Sanitized user summary for `GET /usuarios`. Carries everything the row
/// does except the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Full name.
    #[serde(rename = "nome_completo")]
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Admin flag.
    pub is_admin: bool,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

/// Health response (`GET /health`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
