// SPDX-License-Identifier: MIT

//! Runlog: a personal running-log backend.
//!
//! This crate provides the HTTP API for storing and querying workout
//! records per user, with username/password login issuing bearer tokens.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::{TrainingStore, UserStore};
use services::AuthService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub users: UserStore,
    pub trainings: TrainingStore,
    pub auth: AuthService,
}
