//! Search Domain
//!
//! The filtering front door over the material and product catalogs.
//! Three pure pieces do the work:
//!
//! - [`schema`] — table-driven declaration of the filterable fields per
//!   catalog (range, enum, exact kinds).
//! - [`compiler`] — turns a [`FilterRequest`] into a pure, re-evaluable
//!   AND-composed predicate, rejecting contradictory bound pairs with
//!   `InvalidRange`.
//! - [`executor`] — runs the predicate over a catalog snapshot,
//!   preserving insertion order; in-stock gating applies to materials.
//!
//! [`service::SearchService`] wires these to the material/product
//! repositories; [`handlers`] exposes the POST endpoints.
//!
//! [`FilterRequest`]: models::FilterRequest

pub mod compiler;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod service;

// Re-export commonly used types
pub use compiler::{compile, CompiledFilter};
pub use error::{SearchError, SearchResult};
pub use executor::execute;
pub use handlers::ApiDoc;
pub use models::FilterRequest;
pub use schema::{AttributeKind, FieldSpec, FieldValue, Filterable, MATERIAL_SCHEMA, PRODUCT_SCHEMA};
pub use service::SearchService;
