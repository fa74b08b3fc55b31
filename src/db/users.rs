// SPDX-License-Identifier: MIT

//! Credential store: row-level operations on the `users` table.

use crate::error::AppError;
use crate::models::User;
use sqlx::PgPool;
use uuid::Uuid;

/// Store adapter for the `users` table.
#[derive(Clone)]
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch all users.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash FROM users",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    /// Fetch a user by id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Fetch a user by exact username (case-sensitive as stored).
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Insert a new user with a fresh id. The password must already be
    /// hashed by the caller.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let id = Uuid::new_v4();
        tracing::info!(%id, username, "Creating user");

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, email, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, username, email, password_hash",
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    /// Delete a user by id. Returns false when no row matched.
    ///
    /// A single conditional delete, so a concurrent delete of the same row
    /// is reported accurately instead of racing a separate existence check.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if !deleted {
            tracing::warn!(%id, "User not found for delete");
        }
        Ok(deleted)
    }
}
