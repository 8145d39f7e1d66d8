//! Materials Domain
//!
//! This module provides a complete domain implementation for managing 3D-printing
//! materials (filaments and resins) and their stock ledger.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, stock ledger
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_materials::{
//!     handlers,
//!     repository::InMemoryMaterialRepository,
//!     service::MaterialService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryMaterialRepository::new();
//! let service = MaterialService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{MaterialError, MaterialResult};
pub use handlers::ApiDoc;
pub use models::{
    Caracteristicas, CreateMaterial, Material, MaterialType, StockUpdate,
};
pub use repository::{InMemoryMaterialRepository, MaterialRepository};
pub use service::MaterialService;
