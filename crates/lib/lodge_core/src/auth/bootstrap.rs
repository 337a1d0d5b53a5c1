//! Seed-admin bootstrap.
//!
//! The only way an account comes into existence: deployment configuration
//! names an email and password, and the first run creates that admin. Safe to
//! call any number of times, including concurrently; an existing account is
//! never modified.

use chrono::Utc;
use tracing::{debug, info};

use super::AuthError;
use super::password::hash_password_blocking;
use crate::models::auth::{NewUser, Role, normalize_email};
use crate::store::UserStore;
use crate::uuid::uuidv7;

/// Seed admin credentials from configuration.
#[derive(Clone)]
pub struct SeedAdmin {
    pub email: String,
    pub password: String,
}

impl SeedAdmin {
    /// Build from optional config values; `None` unless both are non-empty.
    pub fn from_parts(email: Option<String>, password: Option<String>) -> Option<Self> {
        let email = email.filter(|e| !e.trim().is_empty())?;
        let password = password.filter(|p| !p.is_empty())?;
        Some(Self { email, password })
    }

    /// Read `SEED_ADMIN_EMAIL` / `SEED_ADMIN_PASSWORD`.
    pub fn from_env() -> Option<Self> {
        Self::from_parts(
            std::env::var("SEED_ADMIN_EMAIL").ok(),
            std::env::var("SEED_ADMIN_PASSWORD").ok(),
        )
    }
}

impl std::fmt::Debug for SeedAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedAdmin")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What a bootstrap run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// No seed credentials configured.
    Skipped,
    /// An account with the seed email already existed.
    AlreadyExists,
    Created,
}

/// Create the seed admin if configured and absent.
pub async fn seed_admin(
    store: &dyn UserStore,
    seed: Option<&SeedAdmin>,
) -> Result<SeedOutcome, AuthError> {
    let Some(seed) = seed else {
        debug!("no seed admin configured");
        return Ok(SeedOutcome::Skipped);
    };
    let email = normalize_email(&seed.email);

    if store.find_user_by_email(&email).await?.is_some() {
        return Ok(SeedOutcome::AlreadyExists);
    }

    let user = NewUser {
        id: uuidv7(),
        email,
        password_hash: hash_password_blocking(seed.password.clone()).await?,
        role: Role::Admin,
        created_at: Utc::now(),
    };

    // Another caller may have won the race since the lookup above.
    if store.insert_user_if_absent(&user).await? {
        info!(email = %user.email, "seed admin created");
        Ok(SeedOutcome::Created)
    } else {
        Ok(SeedOutcome::AlreadyExists)
    }
}
