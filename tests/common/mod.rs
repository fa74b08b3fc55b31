// SPDX-License-Identifier: MIT

use runlog_api::config::Config;
use runlog_api::db::{self, TrainingStore, UserStore};
use runlog_api::routes::create_router;
use runlog_api::services::AuthService;
use runlog_api::AppState;
use std::sync::Arc;

/// Check if a live test database is configured via environment variable.
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("TEST_DATABASE_URL").is_ok()
}

/// Skip test with message if no test database is available.
#[macro_export]
macro_rules! require_database {
    () => {
        if !crate::common::database_available() {
            eprintln!("Skipping: TEST_DATABASE_URL not set");
            return;
        }
    };
}

/// Connect to the test database, creating the schema if needed.
#[allow(dead_code)]
pub async fn test_pool() -> sqlx::PgPool {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL not set");
    let pool = db::connect(&url)
        .await
        .expect("Failed to connect to test database");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL,
            password_hash TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .expect("Failed to create users table");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS trainnings (
            id UUID PRIMARY KEY,
            date DATE NOT NULL,
            kilometers DOUBLE PRECISION NOT NULL,
            time TEXT NOT NULL,
            pace TEXT NOT NULL,
            shoes TEXT NOT NULL,
            location TEXT,
            userid TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .expect("Failed to create trainnings table");

    pool
}

/// Build app state over an arbitrary pool.
#[allow(dead_code)]
pub fn state_for_pool(pool: sqlx::PgPool) -> Arc<AppState> {
    let config = Config::test_default();
    let users = UserStore::new(pool.clone());
    let trainings = TrainingStore::new(pool);
    let auth = AuthService::new(users.clone(), config.jwt_signing_key.clone());

    Arc::new(AppState {
        config,
        users,
        trainings,
        auth,
    })
}

/// Create a test app over a lazy pool. No live database is needed; any
/// route that actually issues a query reports a database error.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let url = Config::test_default().database_url;
    let pool = db::connect_lazy(&url).expect("Failed to build lazy pool");
    let state = state_for_pool(pool);
    (create_router(state.clone()), state)
}
