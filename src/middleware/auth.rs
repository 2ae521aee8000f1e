//! JWT authentication extractor
//!
//! `AuthUser` validates the Bearer token from the Authorization header
//! and hands the verified identity to handlers.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::StringUuid;
use crate::jwt::AccessClaims;
use crate::state::HasServices;

/// Authenticated caller identity extracted from the access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// Account ID from the token's `sub` claim
    pub user_id: StringUuid,
    /// Account email
    pub email: String,
}

impl AuthUser {
    pub fn from_claims(claims: AccessClaims) -> Result<Self, AuthError> {
        let user_id = claims
            .sub
            .parse::<StringUuid>()
            .map_err(|_| AuthError::InvalidToken("Invalid user ID in token".to_string()))?;

        Ok(Self {
            user_id,
            email: claims.email,
        })
    }
}

/// Authentication errors
#[derive(Debug, Clone)]
pub enum AuthError {
    /// No Authorization header present
    MissingToken,
    /// Invalid Authorization header format
    InvalidHeader(String),
    /// Token validation failed
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingToken => "Missing authorization token",
            AuthError::InvalidHeader(_) => "Invalid authorization header",
            AuthError::InvalidToken(_) => "Invalid or expired token",
        };

        let body = serde_json::json!({
            "success": false,
            "message": message,
        });

        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

/// Extract and validate Bearer token from Authorization header
fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader("Invalid header encoding".to_string()))?;

    if !auth_header.starts_with("Bearer ") {
        return Err(AuthError::InvalidHeader(
            "Authorization header must use Bearer scheme".to_string(),
        ));
    }

    Ok(&auth_header[7..])
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: HasServices + Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let claims = state
            .jwt_manager()
            .verify_access_token(token)
            .map_err(|_| AuthError::InvalidToken("Token validation failed".to_string()))?;

        AuthUser::from_claims(claims)
    }
}
