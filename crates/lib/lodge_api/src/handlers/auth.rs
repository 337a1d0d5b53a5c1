//! Authentication request handlers.

use axum::extract::State;
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{LoginRequest, LoginResponse, MeResponse};
use crate::services::auth;

/// `POST /auth/login`: authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth::login(
        state.users.as_ref(),
        body.email.as_deref(),
        body.password.as_deref(),
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(resp))
}

/// `GET /auth/me`: the caller's identity as carried by their token.
///
/// Trusts the token claims for the token's lifetime; the store is not
/// consulted.
pub async fn me_handler(
    Extension(AuthenticatedUser(claims)): Extension<AuthenticatedUser>,
) -> Json<MeResponse> {
    Json(MeResponse {
        user: claims.principal(),
    })
}
