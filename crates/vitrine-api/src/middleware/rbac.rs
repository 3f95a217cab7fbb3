//! Role-based route guarding.

use vitrine_core::error::AppError;

use crate::extractors::AuthUser;

/// Checks that the authenticated user carries the admin claim.
///
/// Composes with the [`AuthUser`] extractor: routes needing only a valid
/// token take the extractor alone; admin routes call this on top.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if !auth.is_admin {
        return Err(AppError::authorization("Admin access required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;
    use vitrine_auth::jwt::Claims;
    use vitrine_core::error::ErrorKind;

    fn auth_user(is_admin: bool) -> AuthUser {
        let now = Utc::now().timestamp();
        AuthUser(Claims {
            sub: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            is_admin,
            iat: now,
            exp: now + 7200,
        })
    }

    #[test]
    fn test_admin_passes() {
        assert!(require_admin(&auth_user(true)).is_ok());
    }

    #[test]
    fn test_non_admin_is_forbidden() {
        let err = require_admin(&auth_user(false)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
}
