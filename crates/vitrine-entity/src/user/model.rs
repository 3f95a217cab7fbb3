//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user in the `usuarios` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name.
    #[serde(rename = "nome_completo")]
    #[sqlx(rename = "nome_completo")]
    pub full_name: String,
    /// Email address, unique across accounts (case-sensitive as stored).
    pub email: String,
    /// bcrypt password hash. Never serialized.
    #[serde(skip_serializing, default)]
    #[sqlx(rename = "senha")]
    pub password_hash: String,
    /// Whether the user has administrator privileges.
    pub is_admin: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Whether the account is an administrator.
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            full_name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            is_admin: false,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("senha").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["nome_completo"], "Ana");
        assert_eq!(json["email"], "a@x.com");
    }
}
