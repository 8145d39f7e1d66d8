//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - CORS configuration
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer());
//! ```

pub mod cors;
pub mod security;

// Re-export commonly used functions
pub use cors::create_cors_layer;
pub use security::security_headers;
