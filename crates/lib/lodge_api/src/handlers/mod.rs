//! Request handlers.

pub mod auth;
pub mod availability;
pub mod service;
pub mod webhooks;

use crate::error::AppError;

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for a known path hit with the wrong method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
