//! Route definitions for the Vitrine HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Paths are the ones the original clients call.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(product_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: registration and login.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/cadastro", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// User listing (diagnostic).
fn user_routes() -> Router<AppState> {
    Router::new().route("/usuarios", get(handlers::user::list_users))
}

/// Product CRUD. Creation is admin-gated inside the handler.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/produtos",
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route(
            "/produtos/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
}

/// Liveness endpoints.
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
}
