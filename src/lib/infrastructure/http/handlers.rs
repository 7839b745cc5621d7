//! API handler modules

use std::any::Any;

use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::domain::contact::ContactService;

use super::{
    errors::{ApiError, ErrorResponse},
    open_api::ApiDocs,
    state::AppState,
};

pub mod contact;
pub mod resume;
pub mod status;
pub mod stoplight;

/// Create the API router
///
/// Every route answers `OPTIONS` with an empty 200 before any other logic,
/// and any method outside the route's contract gets a 405 envelope.
pub fn router<C: ContactService>() -> Router<AppState<C>> {
    Router::new()
        .route(
            "/contact",
            post(contact::handler)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/status",
            get(status::handler)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/resume",
            get(resume::handler)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/docs",
            get(stoplight::handler)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/openapi.json",
            get(Json(ApiDocs::openapi()))
                .options(preflight)
                .fallback(method_not_allowed),
        )
}

/// Short-circuit for CORS preflight requests
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Fallback for methods outside a route's contract
pub async fn method_not_allowed() -> ApiError {
    ApiError::new_405("Method not allowed")
}

/// Catch panics and return a 500 envelope
pub fn panic_handler(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Internal server error".to_string()
    };

    let error = ErrorResponse {
        success: false,
        message: details,
        errors: None,
    };

    let response = Json(error).into_response();

    (StatusCode::INTERNAL_SERVER_ERROR, response).into_response()
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use axum::body::to_bytes;

    use super::*;

    #[tokio::test]
    async fn test_panic_handler() {
        let panic_info = simulate_panic();
        let response = panic_handler(panic_info);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice::<serde_json::Value>(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "Something went wrong" })
        );
    }

    fn simulate_panic() -> Box<dyn std::any::Any + Send + 'static> {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            panic!("Something went wrong");
        }));

        if let Err(err) = result {
            err
        } else {
            panic!("The panic did not occur as expected");
        }
    }
}
