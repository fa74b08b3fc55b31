//! User model for storage and registration.

use serde::Deserialize;
use uuid::Uuid;

/// User row in the `users` table.
///
/// Deliberately not `Serialize`: the password hash must never leave the
/// server. API responses use `UserResponse` in the routes layer instead.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Opaque unique id (assigned by the store on create)
    pub id: Uuid,
    /// Unique username, compared case-sensitively as stored
    pub username: String,
    /// Email address
    pub email: String,
    /// bcrypt hash of the password; verified, never decrypted
    pub password_hash: String,
}

/// Registration payload. Carries the plain password, which is hashed
/// before it reaches the store.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}
