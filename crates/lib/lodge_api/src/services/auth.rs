//! Authentication service: login flow delegating to `lodge_core::auth`.

use lodge_core::auth::jwt::generate_access_token;
use lodge_core::auth::password::verify_password_blocking;
use lodge_core::models::auth::normalize_email;
use lodge_core::store::UserStore;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::LoginResponse;

pub use lodge_core::auth::jwt::verify_access_token;
pub use lodge_core::models::auth::TokenClaims;

/// Verified against when the email is unknown, so both failure paths pay for
/// one key derivation. Precomputed for `lodge-dummy-credential` with the
/// standard round count, so no request pays to build it.
const DUMMY_CREDENTIAL: &str =
    "000102030405060708090a0b0c0d0e0f:0892bfdd3bf58e906a48bdb83ad58982e5313cd16ba1f67bf6feebf218137f94";

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid credentials".into())
}

/// Authenticate with email + password.
///
/// Unknown email and wrong password produce the same error.
pub async fn login(
    users: &dyn UserStore,
    email: Option<&str>,
    password: Option<&str>,
    jwt_secret: &[u8],
) -> AppResult<LoginResponse> {
    let (email, password) = match (email, password) {
        (Some(e), Some(p)) if !e.trim().is_empty() && !p.is_empty() => (normalize_email(e), p),
        _ => {
            return Err(AppError::Validation(
                "Email and password are required".into(),
            ));
        }
    };

    let Some(found) = users.find_user_by_email(&email).await? else {
        let _ =
            verify_password_blocking(password.to_string(), DUMMY_CREDENTIAL.to_string()).await?;
        debug!("login failed");
        return Err(invalid_credentials());
    };

    if !verify_password_blocking(password.to_string(), found.password_hash).await? {
        debug!("login failed");
        return Err(invalid_credentials());
    }

    let principal = found.user.principal();
    let token = generate_access_token(&principal, jwt_secret)?;
    info!(user_id = %principal.id, "admin logged in");

    Ok(LoginResponse {
        token,
        user: principal,
    })
}
