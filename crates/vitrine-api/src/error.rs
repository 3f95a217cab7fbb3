//! Maps domain `AppError` to HTTP responses.
//!
//! This is the single error-translation layer: every handler returns
//! `Result<_, ApiError>` and relies on this mapping instead of doing its
//! own status bookkeeping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use vitrine_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Newtype carrying an [`AppError`] across the Axum response boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        let (status, error_code, message) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.message),
            ErrorKind::Conflict => (StatusCode::BAD_REQUEST, "CONFLICT", err.message),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", err.message),
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN", err.message),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", err.message),
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                // Store and internal failures are logged with full detail but
                // never surfaced to the client.
                tracing::error!(error = %err.message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_kind_to_status_mapping() {
        assert_eq!(
            status_of(AppError::validation("missing credentials")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::conflict("duplicate email")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::authentication("bad token")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::authorization("admins only")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::not_found("no such user")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::database("connection refused")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::internal("broken")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
