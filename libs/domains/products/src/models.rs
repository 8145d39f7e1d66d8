use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Physical size of a printed product, in millimetres. All axes ≥ 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct Dimensiones {
    #[validate(range(min = 0.0))]
    pub ancho: f64,
    #[validate(range(min = 0.0))]
    pub alto: f64,
    #[validate(range(min = 0.0))]
    pub profundo: f64,
}

/// Product entity - a catalog item available for sale, independent of
/// material stock.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Opaque identifier, stable once assigned
    pub id: String,
    /// Product name
    pub nombre: String,
    /// Product description
    pub descripcion: String,
    /// Base price
    pub precio_base: f64,
    /// Physical dimensions
    pub dimensiones: Dimensiones,
    /// Free-form category string
    pub categoria: String,
    /// Lifecycle state. `disponible` is one known value; the field is
    /// treated as an opaque string for compatibility.
    pub estado: String,
}

/// DTO for creating a product. Also used for full-record replacement:
/// PUT overwrites every field, there is no partial-patch merge.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub precio_base: f64,
    #[validate(nested)]
    #[serde(default)]
    pub dimensiones: Dimensiones,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub estado: String,
}

impl Product {
    /// Create a new product from a CreateProduct DTO with a fresh id.
    pub fn new(input: CreateProduct) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input)
    }

    /// Build a product with a caller-supplied id (seed data, replacement).
    pub fn with_id(id: String, input: CreateProduct) -> Self {
        Self {
            id,
            nombre: input.nombre,
            descripcion: input.descripcion,
            precio_base: input.precio_base,
            dimensiones: input.dimensiones,
            categoria: input.categoria,
            estado: input.estado,
        }
    }
}
