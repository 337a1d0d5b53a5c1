//! Application error types.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lodge_core::auth::AuthError;
use lodge_core::availability::AvailabilityError;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// Every variant renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Storage failure whose message is returned to the caller. Only used by
    /// the webhooks, whose callers are the booking platform.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Map an availability error for a webhook caller, exposing storage detail.
    pub fn from_webhook(e: AvailabilityError) -> Self {
        match e {
            AvailabilityError::DbError(e) => AppError::Storage(e.to_string()),
            other => other.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m),
            AppError::Storage(m) => {
                error!(error = %m, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, m)
            }
            AppError::Internal(m) => {
                error!(error = %m, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        warn!(error = %e, "rejected request body");
        AppError::Validation("Invalid request body".into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        warn!(error = %e, "rejected query string");
        AppError::Validation("Invalid query string".into())
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::CredentialError => AppError::Unauthorized("Invalid credentials".into()),
            AuthError::TokenError(_) => AppError::Unauthorized("Unauthorized".into()),
            AuthError::ValidationError(msg) => AppError::Validation(msg),
            AuthError::DbError(e) => AppError::Internal(e.to_string()),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<AvailabilityError> for AppError {
    fn from(e: AvailabilityError) -> Self {
        match e {
            AvailabilityError::Validation(msg) => AppError::Validation(msg),
            AvailabilityError::Corrupt(msg) => AppError::Internal(msg),
            AvailabilityError::DbError(e) => AppError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn internal_errors_hide_detail() {
        let (status, json) = body_of(AppError::Internal("connection refused".into())).await;
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert_eq!(serde_json::json!({"error": "Internal server error"}), json);
    }

    #[tokio::test]
    async fn webhook_storage_errors_expose_detail() {
        let err = AppError::from_webhook(AvailabilityError::DbError(sqlx::Error::PoolTimedOut));
        let (status, json) = body_of(err).await;
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert_eq!(sqlx::Error::PoolTimedOut.to_string(), json["error"]);
    }

    #[tokio::test]
    async fn webhook_validation_errors_stay_400() {
        let err = AppError::from_webhook(AvailabilityError::Validation("bad".into()));
        let (status, json) = body_of(err).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        assert_eq!("bad", json["error"]);
    }

    #[tokio::test]
    async fn credential_errors_are_generic() {
        let (status, json) = body_of(AuthError::CredentialError.into()).await;
        assert_eq!(StatusCode::UNAUTHORIZED, status);
        assert_eq!("Invalid credentials", json["error"]);
    }
}
