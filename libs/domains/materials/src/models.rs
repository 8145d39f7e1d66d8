use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Material kind. Determines the stock unit: metres for filament,
/// millilitres for resin.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MaterialType {
    #[default]
    Filamento,
    Resina,
}

/// Technical characteristics of a material.
///
/// One record shape is shared between filaments and resins on the
/// wire: filament-only fields (`diametro_filamento`,
/// `densidad`) are meaningless for resins and vice versa
/// (`dureza`, `viscosidad`, `tiempo_cura`, `tolerancia`). Which side
/// applies is keyed by [`Material::tipo`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Caracteristicas {
    /// Color name
    #[serde(default)]
    pub color: String,
    /// Print/extrusion temperature in °C
    #[serde(default)]
    pub temperatura_impresion: i32,
    /// Build-plate temperature in °C
    #[serde(default)]
    pub temperatura_plataforma: i32,
    /// Tensile strength in MPa
    #[serde(default)]
    pub resistencia_tensil: f64,
    /// Filament diameter in mm (filament only)
    pub diametro_filamento: Option<f64>,
    /// Density in g/cm³ (filament only)
    pub densidad: Option<f64>,
    /// Shore hardness (resin only)
    pub dureza: Option<f64>,
    /// Viscosity in cP (resin only)
    pub viscosidad: Option<f64>,
    /// Cure time in seconds (resin only)
    pub tiempo_cura: Option<i32>,
    /// Dimensional tolerance in mm (resin only)
    pub tolerancia: Option<f64>,
}

/// Material entity - a consumable print substance with tracked stock.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Material {
    /// Opaque identifier, stable once assigned
    pub id: String,
    /// Material name
    pub nombre: String,
    /// Material kind (filament or resin)
    pub tipo: MaterialType,
    /// Manufacturer name
    pub fabricante: String,
    /// Advisory availability flag. Never authoritative: availability is
    /// derived from `stock > 0` (see [`Material::is_available`]).
    pub disponible: bool,
    /// On-hand quantity: metres for filament, ml for resin
    pub stock: f64,
    /// Unit price
    pub precio_por_unidad: f64,
    /// Technical characteristics
    pub caracteristicas: Caracteristicas,
}

/// DTO for creating a material. Also used for full-record replacement:
/// PUT overwrites every field, there is no partial-patch merge.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMaterial {
    #[validate(length(min = 1, max = 200))]
    pub nombre: String,
    #[serde(default)]
    pub tipo: MaterialType,
    #[serde(default)]
    pub fabricante: String,
    #[serde(default)]
    pub disponible: bool,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub stock: f64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub precio_por_unidad: f64,
    #[serde(default)]
    pub caracteristicas: Caracteristicas,
}

/// Stock overwrite request. The new quantity replaces the stored one
/// outright; this is not a delta adjustment.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct StockUpdate {
    /// New absolute stock quantity
    pub stock: f64,
}

impl Material {
    /// Create a new material from a CreateMaterial DTO with a fresh id.
    pub fn new(input: CreateMaterial) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input)
    }

    /// Build a material with a caller-supplied id (seed data, replacement).
    pub fn with_id(id: String, input: CreateMaterial) -> Self {
        Self {
            id,
            nombre: input.nombre,
            tipo: input.tipo,
            fabricante: input.fabricante,
            disponible: input.disponible,
            stock: input.stock,
            precio_por_unidad: input.precio_por_unidad,
            caracteristicas: input.caracteristicas,
        }
    }

    /// Derived availability: `stock > 0`, regardless of the stored
    /// `disponible` flag.
    pub fn is_available(&self) -> bool {
        self.stock > 0.0
    }
}
