// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod auth;

pub use auth::AuthService;
