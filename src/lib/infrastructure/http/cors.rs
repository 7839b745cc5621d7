//! CORS policy

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderName, HeaderValue, Method,
};
use tower_http::cors::CorsLayer;

/// Origins allowed when `ALLOWED_ORIGINS` is not set
const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://localhost:3000",
    "https://portfolio-ofki.vercel.app",
];

/// The origins allowed to call the API
///
/// `ALLOWED_ORIGINS` is a comma-separated list; without it the built-in
/// defaults apply.
pub fn allowed_origins() -> Vec<String> {
    std::env::var("ALLOWED_ORIGINS")
        .ok()
        .map(|raw| parse_origins(&raw))
        .unwrap_or_else(|| DEFAULT_ORIGINS.iter().map(|origin| origin.to_string()).collect())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

/// Create the CORS layer for the API
///
/// A request origin on the list is echoed back as the allowed origin;
/// credentials are always allowed.
pub fn layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            CONTENT_TYPE,
            ACCEPT,
            AUTHORIZATION,
        ])
}
