//! Lazy seed-admin bootstrap on the request path.
//!
//! The server seeds at startup; this layer covers a startup attempt that
//! failed (e.g. the database was not reachable yet). The first successful
//! run is remembered, so later requests skip the store entirely.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::AppState;

/// Axum middleware: make sure the seed admin exists, then continue.
///
/// A bootstrap failure is logged and the request proceeds; the next request
/// retries.
pub async fn ensure_seed_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(e) = state.ensure_seed_admin().await {
        warn!(error = %e, "seed admin bootstrap failed, will retry");
    }
    next.run(request).await
}
