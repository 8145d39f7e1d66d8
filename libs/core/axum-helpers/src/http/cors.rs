//! CORS layer construction.

use axum::http::{HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build a CORS layer from the `CORS_ALLOWED_ORIGIN` environment variable.
///
/// `CORS_ALLOWED_ORIGIN` holds comma-separated origins, e.g.
/// `http://localhost:3000,https://example.com`. When the variable is
/// unset or holds no valid origins, the layer falls back to allowing any
/// origin without credentials, which suits local development.
pub fn create_cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = std::env::var("CORS_ALLOWED_ORIGIN")
        .ok()
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| s.parse::<HeaderValue>().ok())
                .collect()
        })
        .unwrap_or_default();

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ];

    if origins.is_empty() {
        tracing::info!("CORS configured permissively (no CORS_ALLOWED_ORIGIN set)");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        tracing::info!("CORS configured with {} allowed origin(s)", origins.len());
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(methods)
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_credentials(true)
            .max_age(Duration::from_secs(3600))
    }
}
