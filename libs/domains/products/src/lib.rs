//! Products Domain
//!
//! This module provides a complete domain implementation for the printable
//! product catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! let repository = InMemoryProductRepository::new();
//! let service = ProductService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Dimensiones, Product};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
