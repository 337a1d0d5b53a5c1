//! Request and response bodies.
//!
//! Request bodies reject unknown fields; required fields are `Option` so a
//! missing value surfaces as a validation error rather than a parse failure.

use chrono::NaiveDate;
use lodge_core::models::auth::Principal;
use lodge_core::models::availability::DateStatus;
use serde::{Deserialize, Serialize};

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /` response.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub ok: bool,
    pub service: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Principal,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Principal,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub property_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedDatesResponse {
    pub blocked_dates: Vec<NaiveDate>,
}

/// Rows as stored: `[{date, status}]`.
pub type AvailabilityRecordsResponse = Vec<DateStatus>;

/// `POST /webhook/hostaway` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HostawayWebhook {
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub blocked_dates: Option<Vec<String>>,
}

/// `POST /webhook/availability` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookingWebhook {
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub arrival_date: Option<String>,
    #[serde(default)]
    pub departure_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
