//! Database layer (hosted Postgres).
//!
//! Store adapters translate domain operations into equality-filtered
//! queries against the remote database. They share one long-lived pool,
//! passed in explicitly at construction; there is no ambient client.

pub mod trainings;
pub mod users;

pub use trainings::TrainingStore;
pub use users::UserStore;

use crate::error::AppError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Connect to the hosted Postgres database.
pub async fn connect(database_url: &str) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .map_err(|e| AppError::Database(format!("Failed to connect to Postgres: {}", e)))
}

/// Create a pool without establishing a connection up front.
///
/// Used by tests that exercise routing and auth without a live database;
/// any query issued against it surfaces as a database error.
pub fn connect_lazy(database_url: &str) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
        .map_err(|e| AppError::Database(format!("Invalid database URL: {}", e)))
}
