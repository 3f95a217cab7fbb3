//! Store capability traits.
//!
//! Handlers consume these as `Arc<dyn UserStore>` / `Arc<dyn ProductStore>`
//! handles constructed once at process start, so the HTTP layer depends on
//! a capability rather than a connection pool. The sqlx repositories in
//! [`crate::repositories`] are the production implementations.

use async_trait::async_trait;
use uuid::Uuid;

use vitrine_core::result::AppResult;
use vitrine_entity::product::{CreateProduct, Product, UpdateProduct};
use vitrine_entity::user::{CreateUser, User};

/// Persistent store of user credentials.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Look up a user by exact email match.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user record. Fails with a `Conflict` error if the
    /// email is already taken.
    async fn insert(&self, user: CreateUser) -> AppResult<User>;

    /// List all user records.
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Persistent store of catalog products.
#[async_trait]
pub trait ProductStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new product record.
    async fn insert(&self, product: CreateProduct) -> AppResult<Product>;

    /// List all products.
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// Find a product by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Overwrite an existing product. Returns `None` when no row matched.
    async fn update(&self, id: Uuid, changes: UpdateProduct) -> AppResult<Option<Product>>;

    /// Delete a product by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
