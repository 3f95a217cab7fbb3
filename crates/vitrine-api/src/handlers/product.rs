//! Product CRUD handlers.
//!
//! Creation requires a valid token with the admin claim. The remaining
//! operations are open, matching the surface this service inherited.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use vitrine_core::error::AppError;
use vitrine_entity::product::Product;

use crate::dto::request::ProductRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// POST /produtos (admin only)
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    require_admin(&auth)?;

    let product = state.product_store.insert(req.into_create()).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /produtos
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.product_store.find_all().await?;
    Ok(Json(products))
}

/// GET /produtos/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .product_store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(product))
}

/// PUT /produtos/{id}
///
/// Full overwrite of every field. A missing id is not an error: the
/// response is 200 either way, as in the original surface.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.product_store.update(id, req.into_update()).await?;

    Ok(Json(MessageResponse::new("Product updated successfully")))
}

/// DELETE /produtos/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.product_store.delete(id).await?;

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
