//! Print Profiles Domain
//!
//! Print profiles are named sets of printer parameters tied to one
//! material. Besides plain CRUD, the domain carries the
//! recommended-profile selection: every profile flagged
//! `es_recomendado`, optionally restricted to a single material, in
//! stored order. Several profiles for the same material may carry the
//! flag at once.
//!
//! Layered like the other domains: handlers → service → repository →
//! models.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProfileError, ProfileResult};
pub use handlers::ApiDoc;
pub use models::{CreatePrintProfile, PrintProfile};
pub use repository::{InMemoryProfileRepository, ProfileRepository};
pub use service::ProfileService;
