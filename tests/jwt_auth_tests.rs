// SPDX-License-Identifier: MIT

//! JWT session token tests.
//!
//! These tests verify that tokens created by the auth service can be
//! decoded by the auth middleware, catching compatibility issues early.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use runlog_api::middleware::auth::{create_jwt, Claims};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

fn decode_claims(token: &str) -> Claims {
    let key = DecodingKey::from_secret(SIGNING_KEY);
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(token, &key, &validation)
        .expect("Failed to decode JWT - check Claims struct compatibility")
        .claims
}

#[test]
fn test_jwt_roundtrip() {
    let user_id = Uuid::new_v4();
    let token = create_jwt(user_id, "alice@example.com", SIGNING_KEY).unwrap();

    let claims = decode_claims(&token);

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, "alice@example.com");
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_jwt_subject_parses_as_uuid() {
    let user_id = Uuid::new_v4();
    let token = create_jwt(user_id, "a@x.com", SIGNING_KEY).unwrap();

    let claims = decode_claims(&token);
    let parsed: Uuid = claims.sub.parse().expect("sub claim should be a UUID");

    assert_eq!(parsed, user_id);
}

#[test]
fn test_jwt_expires_in_one_hour() {
    let token = create_jwt(Uuid::new_v4(), "a@x.com", SIGNING_KEY).unwrap();
    let claims = decode_claims(&token);

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    // Expiry is absolute, one hour from issue
    assert_eq!(claims.exp - claims.iat, 3600);
    assert!(claims.exp > now + 3500, "Token should expire ~1 hour out");
    assert!(claims.exp <= now + 3700, "Token should not outlive an hour");
}

#[test]
fn test_jwt_rejected_with_wrong_key() {
    let token = create_jwt(Uuid::new_v4(), "a@x.com", SIGNING_KEY).unwrap();

    let key = DecodingKey::from_secret(b"a_different_32_byte_signing_key!");
    let validation = Validation::new(Algorithm::HS256);

    assert!(decode::<Claims>(&token, &key, &validation).is_err());
}
