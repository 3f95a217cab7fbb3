//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use vitrine_core::error::{AppError, ErrorKind};
use vitrine_core::result::AppResult;
use vitrine_entity::user::{CreateUser, User};

use crate::store::UserStore;

/// sqlx-backed repository for the `usuarios` table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// Find a user by email. The match is exact: emails are stored and
    /// compared case-sensitively.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM usuarios WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Insert a new user. The table carries a UNIQUE constraint on email;
    /// a violation maps to `Conflict` so concurrent registrations of the
    /// same address cannot both succeed.
    async fn insert(&self, user: CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO usuarios (nome_completo, email, senha, is_admin)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::conflict("E-mail already registered");
                }
            }
            AppError::with_source(ErrorKind::Database, "Failed to insert user", e)
        })
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM usuarios ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }
}
