//! REST API handlers and shared response envelopes
//!
//! Every body carries a `success` flag; token-bearing and entity-bearing
//! responses add their payload under a named key to match the client.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod contact;
pub mod health;

use crate::domain::{Booking, PublicUser, User};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::policy;
use crate::state::HasServices;
use serde::{Deserialize, Serialize};

/// `{ success, message }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// `{ success, message, token, user }` for register and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

/// `{ success, user }`
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: PublicUser,
}

/// `{ success, users }`
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub success: bool,
    pub users: Vec<PublicUser>,
}

/// `{ success, message, booking }`
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
    pub booking: Booking,
}

/// `{ success, bookings }`
#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub success: bool,
    pub bookings: Vec<Booking>,
}

/// Status arrives as a plain string so an out-of-domain value maps to a
/// 400 validation error rather than a body-rejection.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Resolve the authenticated caller's account and require admin access.
pub(crate) async fn require_admin_caller<S: HasServices>(
    state: &S,
    auth: &AuthUser,
) -> Result<User> {
    let caller = state.account_service().resolve_caller(auth.user_id).await?;
    policy::require_admin(&caller)?;
    Ok(caller)
}
