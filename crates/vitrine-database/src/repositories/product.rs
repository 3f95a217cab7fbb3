//! Product repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use vitrine_core::error::{AppError, ErrorKind};
use vitrine_core::result::AppResult;
use vitrine_entity::product::{CreateProduct, Product, UpdateProduct};

use crate::store::ProductStore;

/// sqlx-backed repository for the `produtos` table.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn insert(&self, product: CreateProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO produtos (nome, descricao, preco, estoque, tamanhos, imagem)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.sizes)
        .bind(&product.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert product", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM produtos ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM produtos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find product by id", e)
            })
    }

    async fn update(&self, id: Uuid, changes: UpdateProduct) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>(
            "UPDATE produtos
             SET nome = $2, descricao = $3, preco = $4, estoque = $5, tamanhos = $6, imagem = $7
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.price)
        .bind(changes.stock)
        .bind(&changes.sizes)
        .bind(&changes.image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
