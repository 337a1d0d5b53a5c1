//! Booking-platform webhooks.
//!
//! Storage failures here return their raw message: the caller is the
//! platform's delivery worker, and the detail shows up in its retry log.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;
use lodge_core::availability::sync;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{BookingWebhook, HostawayWebhook, SuccessResponse};

/// `POST /webhook/hostaway`: replace the property's blocked days.
pub async fn hostaway_handler(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<HostawayWebhook>, AppError>,
) -> AppResult<Json<SuccessResponse>> {
    let (Some(property_id), Some(blocked_dates)) = (body.property_id, body.blocked_dates) else {
        return Err(AppError::Validation(
            "propertyId and blockedDates are required".into(),
        ));
    };

    sync::apply_blocked_feed(state.availability.as_ref(), &property_id, &blocked_dates)
        .await
        .map_err(AppError::from_webhook)?;

    Ok(Json(SuccessResponse { success: true }))
}

/// `POST /webhook/availability`: book every night of a stay.
pub async fn booking_handler(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<BookingWebhook>, AppError>,
) -> AppResult<Json<SuccessResponse>> {
    let (Some(property_id), Some(arrival), Some(departure)) =
        (body.property_id, body.arrival_date, body.departure_date)
    else {
        return Err(AppError::Validation(
            "propertyId, arrivalDate and departureDate are required".into(),
        ));
    };

    sync::apply_booking(
        state.availability.as_ref(),
        &property_id,
        &arrival,
        &departure,
    )
    .await
    .map_err(AppError::from_webhook)?;

    Ok(Json(SuccessResponse { success: true }))
}
