//! Status handler

use axum::{http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The endpoints this API exposes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Endpoints {
    /// The contact form endpoint
    #[schema(example = "/api/contact")]
    pub contact: String,

    /// The resume download endpoint
    #[schema(example = "/api/resume")]
    pub resume: String,

    /// This endpoint
    #[schema(example = "/api/status")]
    pub status: String,
}

/// The status response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Overall service health
    #[schema(example = "ok")]
    pub status: String,

    /// Human-readable description
    #[schema(example = "Portfolio Server API is running")]
    pub message: String,

    /// The running crate version
    #[schema(example = "1.0.0")]
    pub version: String,

    /// The endpoints this API exposes
    pub endpoints: Endpoints,

    /// The server's current time, RFC 3339
    pub timestamp: String,
}

/// Report the API status
#[utoipa::path(
    get,
    operation_id = "status",
    tag = "System",
    path = "/api/status",
    responses(
        (status = StatusCode::OK, description = "Status response", body = StatusResponse),
    )
)]
pub async fn handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: "Portfolio Server API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            contact: "/api/contact".to_string(),
            resume: "/api/resume".to_string(),
            status: "/api/status".to_string(),
        },
        timestamp: Utc::now().to_rfc3339(),
    })
}
