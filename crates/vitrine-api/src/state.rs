//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use vitrine_auth::jwt::decoder::JwtDecoder;
use vitrine_auth::jwt::encoder::JwtEncoder;
use vitrine_auth::password::hasher::PasswordHasher;
use vitrine_core::config::AppConfig;
use vitrine_database::store::{ProductStore, UserStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; the stores are trait
/// objects so tests can substitute in-memory implementations.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Credential store.
    pub user_store: Arc<dyn UserStore>,
    /// Product store.
    pub product_store: Arc<dyn ProductStore>,
    /// Password hasher (bcrypt).
    pub password_hasher: Arc<PasswordHasher>,
    /// Session token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Session token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
}
