//! `AuthUser` extractor — pulls the session token from the Authorization
//! header, verifies it, and injects the claims.
//!
//! This is the base auth gate: a route takes `AuthUser` to require a valid
//! token. The admin gate composes on top via
//! [`crate::middleware::rbac::require_admin`].

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use vitrine_auth::jwt::Claims;
use vitrine_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted, verified session claims available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the inner claims.
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing authorization token"))?;

        // Bearer-style scheme: the token is the second whitespace-delimited
        // word of the header value.
        let token = auth_header
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| AppError::authentication("Invalid or expired token"))?;

        let claims = state.jwt_decoder.verify(token)?;

        Ok(AuthUser(claims))
    }
}
