// SPDX-License-Identifier: MIT

//! Training record routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::stats::{monthly_summaries, MonthlySummary};
use crate::models::{NewTraining, Training};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/trainnings", get(list_trainings).post(create_training))
        .route(
            "/api/trainnings/{id}",
            get(get_training).delete(delete_training),
        )
        .route("/api/trainnings/user/{user_id}", get(list_by_user))
        .route(
            "/api/trainnings/user/{user_id}/year/{year}",
            get(list_by_user_and_year),
        )
        .route("/api/trainnings/user/{user_id}/years", get(list_years))
        .route("/api/trainnings/user/{user_id}/stats", get(user_stats))
}

/// List every training record.
async fn list_trainings(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Training>>> {
    Ok(Json(state.trainings.list().await?))
}

/// Get one training record by id.
async fn get_training(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Training>> {
    let training = state
        .trainings
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Training {} not found", id)))?;
    Ok(Json(training))
}

/// List a user's training records. Possibly empty, never 404.
async fn list_by_user(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Training>>> {
    Ok(Json(state.trainings.list_by_user(&user_id).await?))
}

/// List a user's training records for one calendar year.
async fn list_by_user_and_year(
    State(state): State<Arc<AppState>>,
    Path((user_id, year)): Path<(String, i32)>,
) -> Result<Json<Vec<Training>>> {
    Ok(Json(
        state
            .trainings
            .list_by_user_and_year(&user_id, Some(year))
            .await?,
    ))
}

/// Distinct years with records for a user, most recent first.
async fn list_years(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<i32>>> {
    Ok(Json(state.trainings.distinct_years(&user_id).await?))
}

/// Create a training record.
async fn create_training(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewTraining>,
) -> Result<impl IntoResponse> {
    if !new.kilometers.is_finite() || new.kilometers < 0.0 {
        return Err(AppError::BadRequest(
            "kilometers must be a non-negative number".to_string(),
        ));
    }

    let created = state.trainings.create(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a training record by id.
async fn delete_training(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    if state.trainings.delete_by_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Training {} not found", id)))
    }
}

/// Aggregated stats for a user's records, as rendered by the charts view.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingStatsResponse {
    /// Per-month aggregates, oldest month first
    pub months: Vec<MonthlySummary>,
    pub total_runs: u32,
    pub total_kilometers: f64,
    /// Distinct years with records, most recent first
    pub years: Vec<i32>,
}

/// Monthly distance and pace aggregates for a user.
async fn user_stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<TrainingStatsResponse>> {
    let trainings = state.trainings.list_by_user(&user_id).await?;

    let months = monthly_summaries(&trainings);
    let total_runs = trainings.len() as u32;
    let total_kilometers = trainings.iter().map(|t| t.kilometers).sum();
    let years = crate::db::trainings::distinct_years_desc(&trainings);

    Ok(Json(TrainingStatsResponse {
        months,
        total_runs,
        total_kilometers,
        years,
    }))
}
