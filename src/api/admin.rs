//! Admin console handlers
//!
//! Every handler resolves the caller's account from the store and applies
//! the admin gate before touching any data.

use crate::api::{
    require_admin_caller, BookingListResponse, BookingResponse, MessageResponse, UpdateStatusRequest,
    UserListResponse, UserResponse,
};
use crate::domain::{CreateAccountInput, StringUuid};
use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::state::HasServices;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Parse a path id segment. Taking the segment as a String keeps a
/// malformed id on the same error envelope as every other failure,
/// instead of axum's plain-text path rejection.
fn parse_id(raw: &str, what: &str) -> Result<StringUuid> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("Invalid {what} id")))
}

/// GET /api/admin/bookings
pub async fn list_bookings<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
) -> Result<impl IntoResponse> {
    require_admin_caller(&state, &auth).await?;

    let bookings = state.booking_service().list_all().await?;
    Ok(Json(BookingListResponse {
        success: true,
        bookings,
    }))
}

/// PUT /api/admin/bookings/{id}
pub async fn update_booking_status<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse> {
    require_admin_caller(&state, &auth).await?;
    let id = parse_id(&id, "booking")?;

    let booking = state
        .booking_service()
        .update_status(id, &input.status)
        .await?;
    Ok(Json(BookingResponse {
        success: true,
        message: "Booking status updated".to_string(),
        booking,
    }))
}

/// DELETE /api/admin/bookings/{id}
pub async fn delete_booking<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    require_admin_caller(&state, &auth).await?;
    let id = parse_id(&id, "booking")?;

    state.booking_service().delete(id).await?;
    Ok(Json(MessageResponse::new("Booking deleted")))
}

/// GET /api/admin/users
pub async fn list_users<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
) -> Result<impl IntoResponse> {
    require_admin_caller(&state, &auth).await?;

    let users = state.account_service().list().await?;
    Ok(Json(UserListResponse {
        success: true,
        users,
    }))
}

/// POST /api/admin/users
pub async fn create_user<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
    Json(input): Json<CreateAccountInput>,
) -> Result<impl IntoResponse> {
    require_admin_caller(&state, &auth).await?;

    let user = state.account_service().create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            user,
        }),
    ))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let caller = require_admin_caller(&state, &auth).await?;
    let id = parse_id(&id, "user")?;

    state.account_service().delete(&caller, id).await?;
    Ok(Json(MessageResponse::new("User deleted")))
}
