//! Customer booking handlers

use crate::api::{BookingListResponse, BookingResponse};
use crate::domain::CreateBookingInput;
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::state::HasServices;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// POST /api/bookings
pub async fn create<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
    Json(input): Json<CreateBookingInput>,
) -> Result<impl IntoResponse> {
    let owner = state.account_service().resolve_caller(auth.user_id).await?;
    let booking = state.booking_service().create(&owner, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            success: true,
            message: "Booking submitted successfully".to_string(),
            booking,
        }),
    ))
}

/// GET /api/bookings/my
pub async fn list_mine<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
) -> Result<impl IntoResponse> {
    let bookings = state.booking_service().list_for_user(auth.user_id).await?;
    Ok(Json(BookingListResponse {
        success: true,
        bookings,
    }))
}
