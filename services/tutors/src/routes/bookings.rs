//! Booking handlers, mounted behind [`require_token`](crate::middleware::require_token)

use axum::{
    Extension, Json,
    extract::{Query, State, rejection::JsonRejection},
};
use serde_json::Value;
use tracing::{error, info};

use crate::{
    error::{ApiError, ApiResult},
    middleware::Identity,
    models::{EmailQuery, InsertAck, document_to_json, json_to_document},
    state::AppState,
};

/// Record a booking as given
///
/// The caller's identity is not compared with the booking's `email` field.
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<InsertAck>> {
    let Json(body) = payload?;
    let booking = json_to_document(body)?;
    let inserted_id = state.booking_repository.create(booking).await?;

    info!("Booking {} created by {}", inserted_id, identity.email);
    Ok(Json(InsertAck::new(inserted_id)))
}

/// List bookings recorded under `?email=`
pub async fn get_bookings(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<Vec<Value>>> {
    let email = query.email().ok_or_else(|| {
        ApiError::InvalidArgument("Email query parameter is required.".to_string())
    })?;

    info!("Listing bookings for {} requested by {}", email, identity.email);

    let bookings = state
        .booking_repository
        .find_by_email(email)
        .await
        .map_err(|e| {
            error!("Error fetching booked items by email: {}", e);
            ApiError::Internal("Failed to fetch booked items by email".to_string())
        })?;

    Ok(Json(bookings.into_iter().map(document_to_json).collect()))
}
