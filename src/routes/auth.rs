// SPDX-License-Identifier: MIT

//! Login and registration routes.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(super::users::create_user))
}

/// Login request body.
#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

/// Login response carrying the bearer token.
#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange username/password for a session token.
///
/// Any credential failure is a generic 401; the response never says
/// whether the username exists.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    match state.auth.authenticate(&req.username, &req.password).await? {
        Some(token) => Ok(Json(LoginResponse { token })),
        None => Err(AppError::Unauthorized),
    }
}
