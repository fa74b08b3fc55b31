// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod stats;
pub mod training;
pub mod user;

pub use stats::MonthlySummary;
pub use training::{NewTraining, Training};
pub use user::{NewUser, User};
