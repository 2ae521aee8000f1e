//! Authentication and profile handlers

use crate::api::{TokenResponse, UserResponse};
use crate::domain::{LoginInput, RegisterInput, UpdateProfileInput};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::state::HasServices;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// POST /api/auth/register
pub async fn register<S: HasServices>(
    State(state): State<S>,
    Json(input): Json<RegisterInput>,
) -> Result<impl IntoResponse> {
    let (token, user) = state.auth_service().register(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            success: true,
            message: "Registration successful".to_string(),
            token,
            user,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login<S: HasServices>(
    State(state): State<S>,
    Json(input): Json<LoginInput>,
) -> Result<impl IntoResponse> {
    let (token, user) = state.auth_service().login(input).await?;

    Ok(Json(TokenResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        user,
    }))
}

/// GET /api/auth/me
pub async fn me<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
) -> Result<impl IntoResponse> {
    let user = state.auth_service().me(auth.user_id).await?;
    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}

/// PUT /api/auth/update
pub async fn update_profile<S: HasServices>(
    State(state): State<S>,
    auth: AuthUser,
    Json(input): Json<UpdateProfileInput>,
) -> Result<impl IntoResponse> {
    let user = state
        .auth_service()
        .update_profile(auth.user_id, input)
        .await?;
    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}
