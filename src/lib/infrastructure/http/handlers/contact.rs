//! Contact form handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::contact::{ContactMessage, ContactService},
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Contact form request body
///
/// Absent fields deserialize to empty strings so that missing and empty
/// values report the same violation.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactBody {
    /// The sender's name
    #[schema(example = "Jo")]
    #[serde(default)]
    pub name: String,

    /// The sender's email address
    #[schema(example = "jo@example.com")]
    #[serde(default)]
    pub email: String,

    /// The message text
    #[schema(example = "Hello there")]
    #[serde(default)]
    pub message: String,
}

/// Contact response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    /// Always `true` when the message was relayed
    #[schema(example = true)]
    pub success: bool,

    /// Confirmation message
    #[schema(example = "Message sent successfully!")]
    pub message: String,
}

/// Relay a contact form submission to the portfolio owner
#[utoipa::path(
    post,
    operation_id = "contact",
    tag = "Contact",
    path = "/api/contact",
    request_body = ContactBody,
    responses(
        (status = StatusCode::OK, description = "Message relayed", body = ContactResponse),
        (status = StatusCode::BAD_REQUEST, description = "Invalid form data", body = ErrorResponse),
        (status = StatusCode::METHOD_NOT_ALLOWED, description = "Method not allowed", body = ErrorResponse),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Configuration or relay failure", body = ErrorResponse),
    )
)]
pub async fn handler<C: ContactService>(
    State(state): State<AppState<C>>,
    request: Result<Json<ContactBody>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(body) = request?;

    let message = ContactMessage::new(&body.name, &body.email, &body.message)?;

    state.contact.send_message(&message).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Message sent successfully!".to_string(),
    }))
}
