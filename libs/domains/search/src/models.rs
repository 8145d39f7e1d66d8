use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Filter request, constructed per call and never persisted.
///
/// All bounds are inclusive; an absent bound leaves that axis
/// unconstrained.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct FilterRequest {
    /// Free-text query. Accepted for wire compatibility but never
    /// evaluated; full-text search is out of scope.
    pub query: Option<String>,
    /// Case-sensitive category match (products)
    pub categoria: Option<String>,
    /// Material type match: `filamento` or `resina` (materials)
    pub tipo_material: Option<String>,
    pub precio_min: Option<f64>,
    pub precio_max: Option<f64>,
    pub min_ancho: Option<f64>,
    pub max_ancho: Option<f64>,
    pub min_alto: Option<f64>,
    pub max_alto: Option<f64>,
    pub min_profundo: Option<f64>,
    pub max_profundo: Option<f64>,
}

impl FilterRequest {
    /// Supplied (min, max) bounds for a schema range field.
    pub(crate) fn bounds(&self, field: &str) -> (Option<f64>, Option<f64>) {
        match field {
            "precio" => (self.precio_min, self.precio_max),
            "ancho" => (self.min_ancho, self.max_ancho),
            "alto" => (self.min_alto, self.max_alto),
            "profundo" => (self.min_profundo, self.max_profundo),
            _ => (None, None),
        }
    }

    /// Supplied value for a schema enum/exact field.
    pub(crate) fn text(&self, field: &str) -> Option<&str> {
        match field {
            "categoria" => self.categoria.as_deref(),
            "tipo_material" => self.tipo_material.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_with_all_fields_absent() {
        let request: FilterRequest = serde_json::from_str("{}").unwrap();
        assert!(request.categoria.is_none());
        assert!(request.precio_max.is_none());
        assert_eq!(request.bounds("precio"), (None, None));
    }

    #[test]
    fn test_wire_field_names() {
        let request: FilterRequest = serde_json::from_value(serde_json::json!({
            "query": "soporte",
            "categoria": "Soportes",
            "tipo_material": "filamento",
            "precio_min": 5.0,
            "precio_max": 20.0,
            "min_ancho": 1.0,
            "max_profundo": 8.0
        }))
        .unwrap();

        assert_eq!(request.bounds("precio"), (Some(5.0), Some(20.0)));
        assert_eq!(request.bounds("ancho"), (Some(1.0), None));
        assert_eq!(request.bounds("profundo"), (None, Some(8.0)));
        assert_eq!(request.text("tipo_material"), Some("filamento"));
    }
}
