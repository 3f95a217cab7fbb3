//! Auth handlers — registration and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use vitrine_core::error::AppError;
use vitrine_entity::user::CreateUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /cadastro
///
/// Registers a new account. The email is pre-checked against the store and
/// rejected if taken; the store's uniqueness constraint backs the same
/// rule for concurrent registrations. Self-registration never grants the
/// admin flag, and nothing sensitive is echoed back.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    if state.user_store.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::conflict("E-mail already registered").into());
    }

    let password_hash = state.password_hasher.hash(&req.password)?;

    state
        .user_store
        .insert(CreateUser {
            full_name: req.name,
            email: req.email,
            password_hash,
            is_admin: false,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /login
///
/// Verifies credentials and issues a session token embedding the user's
/// id, email, and admin flag.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Email and password are required"))?;

    let user = state
        .user_store
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if !state
        .password_hasher
        .verify(&req.password, &user.password_hash)?
    {
        return Err(AppError::authentication("Incorrect password").into());
    }

    let token = state.jwt_encoder.issue(&user)?;

    Ok(Json(LoginResponse {
        token,
        is_admin: user.is_admin,
    }))
}
