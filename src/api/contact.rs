//! Contact form handler

use crate::api::MessageResponse;
use crate::domain::SubmitContactInput;
use crate::error::Result;
use crate::state::HasServices;
use axum::{extract::State, response::IntoResponse, Json};

/// POST /api/contact
///
/// Open to unauthenticated callers; saving the message is what matters,
/// the mailbox notification is best-effort.
pub async fn submit<S: HasServices>(
    State(state): State<S>,
    Json(input): Json<SubmitContactInput>,
) -> Result<impl IntoResponse> {
    state.contact_service().submit(input).await?;
    Ok(Json(MessageResponse::new(
        "Message received. We will get back to you soon.",
    )))
}
