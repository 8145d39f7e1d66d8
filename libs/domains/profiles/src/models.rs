use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Print profile - a named set of printer parameters tied to one material.
///
/// Temperatures in °C, speeds in mm/s, layer height and retraction
/// distance in mm, infill and fan speed in percent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PrintProfile {
    /// Opaque identifier, stable once assigned
    pub id: String,
    /// Material this profile is tuned for
    pub material_id: String,
    pub nombre: String,
    pub descripcion: String,
    pub temperatura_nozzle: i32,
    pub temperatura_cama: i32,
    pub velocidad_impresion: i32,
    pub altura_capa: f64,
    pub relleno: i32,
    pub velocidad_retraccion: i32,
    pub distancia_retraccion: f64,
    pub velocidad_ventilador: i32,
    /// Several profiles for the same material may carry this flag at once
    pub es_recomendado: bool,
}

/// DTO for creating a print profile. Also used for full-record
/// replacement: PUT overwrites every field, there is no partial merge.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePrintProfile {
    #[validate(length(min = 1))]
    pub material_id: String,
    #[validate(length(min = 1, max = 200))]
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub temperatura_nozzle: i32,
    #[serde(default)]
    pub temperatura_cama: i32,
    #[serde(default)]
    pub velocidad_impresion: i32,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub altura_capa: f64,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub relleno: i32,
    #[serde(default)]
    pub velocidad_retraccion: i32,
    #[serde(default)]
    pub distancia_retraccion: f64,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub velocidad_ventilador: i32,
    #[serde(default)]
    pub es_recomendado: bool,
}

impl PrintProfile {
    /// Create a new profile from a CreatePrintProfile DTO with a fresh id.
    pub fn new(input: CreatePrintProfile) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input)
    }

    /// Build a profile with a caller-supplied id (seed data, replacement).
    pub fn with_id(id: String, input: CreatePrintProfile) -> Self {
        Self {
            id,
            material_id: input.material_id,
            nombre: input.nombre,
            descripcion: input.descripcion,
            temperatura_nozzle: input.temperatura_nozzle,
            temperatura_cama: input.temperatura_cama,
            velocidad_impresion: input.velocidad_impresion,
            altura_capa: input.altura_capa,
            relleno: input.relleno,
            velocidad_retraccion: input.velocidad_retraccion,
            distancia_retraccion: input.distancia_retraccion,
            velocidad_ventilador: input.velocidad_ventilador,
            es_recomendado: input.es_recomendado,
        }
    }
}
