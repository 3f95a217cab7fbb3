//! User listing handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /usuarios
///
/// Diagnostic listing of registered accounts. Password hashes are never
/// included.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_store.list().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}
