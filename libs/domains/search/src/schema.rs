//! Attribute schema: the table-driven declaration of filterable fields.
//!
//! The predicate compiler iterates these tables instead of hand-coding a
//! branch per field, so adding a filterable attribute is a schema edit.
//! The tables are immutable at run time.

use domain_materials::Material;
use domain_products::Product;

/// Filterable attribute kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Numeric, constrained by inclusive min/max bounds
    Range,
    /// Finite value set, exact match
    Enum,
    /// Case-sensitive string equality, no normalisation
    Exact,
}

/// One filterable field of a catalog.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: AttributeKind,
}

/// Filterable fields of the product catalog.
pub const PRODUCT_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "categoria",
        kind: AttributeKind::Exact,
    },
    FieldSpec {
        name: "precio",
        kind: AttributeKind::Range,
    },
    FieldSpec {
        name: "ancho",
        kind: AttributeKind::Range,
    },
    FieldSpec {
        name: "alto",
        kind: AttributeKind::Range,
    },
    FieldSpec {
        name: "profundo",
        kind: AttributeKind::Range,
    },
];

/// Filterable fields of the material catalog.
pub const MATERIAL_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "tipo_material",
        kind: AttributeKind::Enum,
    },
    FieldSpec {
        name: "precio",
        kind: AttributeKind::Range,
    },
];

/// Value of a filterable field as seen by the compiled predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

/// A catalog entry the query executor can evaluate.
///
/// `field` resolves a schema field name to the entry's value;
/// `selectable` gates whether the entry may appear in any result at all.
pub trait Filterable {
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Entries with `selectable() == false` never match, whatever the
    /// filter says. Products are always selectable; materials with
    /// exhausted stock are not.
    fn selectable(&self) -> bool {
        true
    }
}

impl Filterable for Product {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "categoria" => Some(FieldValue::Text(&self.categoria)),
            "precio" => Some(FieldValue::Number(self.precio_base)),
            "ancho" => Some(FieldValue::Number(self.dimensiones.ancho)),
            "alto" => Some(FieldValue::Number(self.dimensiones.alto)),
            "profundo" => Some(FieldValue::Number(self.dimensiones.profundo)),
            _ => None,
        }
    }
}

impl Filterable for Material {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "tipo_material" => Some(FieldValue::Text(match self.tipo {
                domain_materials::MaterialType::Filamento => "filamento",
                domain_materials::MaterialType::Resina => "resina",
            })),
            "precio" => Some(FieldValue::Number(self.precio_por_unidad)),
            _ => None,
        }
    }

    fn selectable(&self) -> bool {
        self.is_available()
    }
}
