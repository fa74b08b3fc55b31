// SPDX-License-Identifier: MIT

//! Runlog API Server
//!
//! Stores and serves personal running-log entries backed by a hosted
//! Postgres database, with JWT-based login.

use runlog_api::{
    config::Config,
    db::{self, TrainingStore, UserStore},
    services::AuthService,
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment. A missing or short signing key
    // is fatal here, never a per-request failure.
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Runlog API");

    // Connect to the hosted Postgres database
    let pool = db::connect(&config.database_url)
        .await
        .expect("Failed to connect to Postgres");
    tracing::info!("Connected to Postgres");

    // Store adapters share the pool; each issues independent queries and
    // holds no request-scoped state.
    let users = UserStore::new(pool.clone());
    let trainings = TrainingStore::new(pool);
    let auth = AuthService::new(users.clone(), config.jwt_signing_key.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        users,
        trainings,
        auth,
    });

    let app = runlog_api::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("runlog_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
