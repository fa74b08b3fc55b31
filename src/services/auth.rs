// SPDX-License-Identifier: MIT

//! Username/password authentication issuing bearer tokens.

use crate::db::UserStore;
use crate::error::AppError;
use crate::middleware::auth::create_jwt;

/// Verifies submitted credentials against the credential store and issues
/// signed session tokens.
#[derive(Clone)]
pub struct AuthService {
    users: UserStore,
    signing_key: Vec<u8>,
}

impl AuthService {
    /// The key length is validated at config load; by the time a service
    /// is constructed the key is known to be usable.
    pub fn new(users: UserStore, signing_key: Vec<u8>) -> Self {
        Self { users, signing_key }
    }

    /// Check a username/password pair and return an encoded token on
    /// success, or `None` for any credential failure.
    ///
    /// Callers cannot distinguish an unknown username from a wrong
    /// password; both come back as `None`. A stored hash that bcrypt
    /// cannot parse counts as a failed match for the same reason.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<String>, AppError> {
        let Some(user) = self.users.get_by_username(username).await? else {
            tracing::debug!(username, "Login attempt for unknown username");
            return Ok(None);
        };

        if !bcrypt::verify(password, &user.password_hash).unwrap_or(false) {
            tracing::debug!(username, "Login attempt with wrong password");
            return Ok(None);
        }

        let token = create_jwt(user.id, &user.email, &self.signing_key)?;
        tracing::info!(username, user_id = %user.id, "Issued session token");
        Ok(Some(token))
    }
}
