//! Password credentials via PBKDF2-HMAC-SHA256.
//!
//! A credential is encoded as `<hex salt>:<hex digest>` so the salt can be
//! recovered at verification time.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::AuthError;

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 100_000;

/// Random salt length in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Derived digest length in bytes (256 bits).
pub const DIGEST_LEN: usize = 32;

const DELIMITER: char = ':';

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();
    hash_password_with_salt(password, &salt)
}

/// Hash a password with the given salt. Deterministic for a fixed salt.
pub fn hash_password_with_salt(password: &str, salt: &[u8]) -> String {
    let digest = derive(password, salt);
    format!("{}{DELIMITER}{}", hex::encode(salt), hex::encode(digest))
}

/// Verify a password against a stored credential.
///
/// Malformed credentials (no delimiter, bad hex, wrong digest length) never
/// match.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once(DELIMITER) else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (hex::decode(salt_hex), hex::decode(digest_hex)) else {
        return false;
    };
    if salt.is_empty() || expected.len() != DIGEST_LEN {
        return false;
    }
    derive(password, &salt)
        .as_slice()
        .ct_eq(expected.as_slice())
        .into()
}

/// Hash on the blocking pool so request workers are not stalled by PBKDF2.
pub async fn hash_password_blocking(password: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AuthError::Internal(format!("password hash task: {e}")))
}

/// Verify on the blocking pool.
pub async fn verify_password_blocking(password: String, stored: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .map_err(|e| AuthError::Internal(format!("password verify task: {e}")))
}

fn derive(password: &str, salt: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ROUNDS, &mut out);
    out
}
