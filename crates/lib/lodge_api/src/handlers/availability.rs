//! Public availability reads for the booking calendar.

use axum::Json;
use axum::extract::{Query, State};
use axum_extra::extract::WithRejection;
use lodge_core::availability::sync;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{AvailabilityQuery, AvailabilityRecordsResponse, BlockedDatesResponse};

fn property_id(query: AvailabilityQuery) -> AppResult<String> {
    query
        .property_id
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| AppError::Validation("propertyId is required".into()))
}

/// `GET /api/availability?propertyId=`: unavailable days, sorted.
pub async fn blocked_dates_handler(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<AvailabilityQuery>, AppError>,
) -> AppResult<Json<BlockedDatesResponse>> {
    let property_id = property_id(query)?;
    let blocked_dates = sync::unavailable_dates(state.availability.as_ref(), &property_id).await?;
    Ok(Json(BlockedDatesResponse { blocked_dates }))
}

/// `GET /api/availability/records?propertyId=`: raw `{date, status}` rows.
pub async fn records_handler(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<AvailabilityQuery>, AppError>,
) -> AppResult<Json<AvailabilityRecordsResponse>> {
    let property_id = property_id(query)?;
    let records = sync::unavailable_records(state.availability.as_ref(), &property_id).await?;
    Ok(Json(records))
}
