//! JWT session token generation and verification.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::distr::Alphanumeric;
use rand::{Rng, rng};
use tracing::{debug, info, warn};

use super::AuthError;
use crate::models::auth::{Principal, TokenClaims};

/// Session token lifetime: 2 hours.
pub const ACCESS_TOKEN_EXPIRY_SECS: i64 = 2 * 60 * 60;

/// Generate a signed JWT session token (HS256, 2 h expiry).
pub fn generate_access_token(principal: &Principal, secret: &[u8]) -> Result<String, AuthError> {
    generate_access_token_at(principal, Utc::now(), secret)
}

/// Generate a token as if issued at `issued_at`.
pub fn generate_access_token_at(
    principal: &Principal,
    issued_at: DateTime<Utc>,
    secret: &[u8],
) -> Result<String, AuthError> {
    let claims = TokenClaims {
        sub: principal.id.clone(),
        email: principal.email.clone(),
        role: principal.role,
        exp: (issued_at + Duration::seconds(ACCESS_TOKEN_EXPIRY_SECS)).timestamp(),
        iat: issued_at.timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::TokenError(format!("jwt encode: {e}")))
}

/// Verify a JWT session token, returning the claims on success.
///
/// Malformed, tampered, expired and wrongly-signed tokens all yield `None`.
pub fn verify_access_token(token: &str, secret: &[u8]) -> Option<TokenClaims> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);
    match decode::<TokenClaims>(token, &key, &validation) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            debug!(error = %e, "rejected session token");
            None
        }
    }
}

/// Resolve the JWT secret: env var `JWT_SECRET` → `AUTH_SECRET` → persisted file.
pub fn resolve_jwt_secret() -> String {
    for var in ["JWT_SECRET", "AUTH_SECRET"] {
        if let Ok(secret) = std::env::var(var)
            && !secret.is_empty()
        {
            return secret;
        }
    }
    resolve_persisted_secret(&jwt_secret_path())
}

/// Read the secret stored at `path`, generating and persisting one if absent.
pub fn resolve_persisted_secret(path: &Path) -> String {
    if let Ok(existing) = std::fs::read_to_string(path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    let secret: String = rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    match std::fs::write(path, &secret) {
        Ok(()) => info!(path = %path.display(), "generated new JWT secret"),
        Err(e) => warn!(path = %path.display(), error = %e, "could not persist JWT secret"),
    }
    secret
}

/// Path to the persisted JWT secret file.
fn jwt_secret_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lodge")
        .join("jwt-secret")
}
