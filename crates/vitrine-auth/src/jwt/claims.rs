//! JWT claims structure embedded in session tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload embedded in every session token.
///
/// The token is stateless: whatever it asserts at issuance time is honored
/// until expiry. In particular the admin flag is not re-checked against the
/// store, so privilege changes only take effect on the next login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Email address at the time of issuance.
    pub email: String,
    /// Admin flag at the time of issuance.
    pub is_admin: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
