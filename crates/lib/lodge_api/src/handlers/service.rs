//! Service probe.

use axum::Json;

use crate::models::ServiceInfoResponse;

/// Name reported by `GET /`.
pub const SERVICE_NAME: &str = "cms-auth";

/// `GET /`: liveness and service identity.
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        ok: true,
        service: SERVICE_NAME,
    })
}
