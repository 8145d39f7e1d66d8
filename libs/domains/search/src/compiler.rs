//! Filter predicate compiler.
//!
//! `compile` turns a [`FilterRequest`] into a [`CompiledFilter`]: a pure,
//! re-evaluable AND-composition of per-field constraints. Validation and
//! constraint construction are driven by the attribute schema tables, not
//! per-field branches.

use crate::error::{SearchError, SearchResult};
use crate::models::FilterRequest;
use crate::schema::{AttributeKind, FieldSpec, FieldValue, Filterable};

/// Axes that carry (min, max) bound pairs on the wire. Every supplied
/// pair is validated, including axes the target schema does not filter
/// on, so a contradictory request never silently succeeds.
const BOUND_AXES: &[&str] = &["precio", "ancho", "alto", "profundo"];

#[derive(Debug, Clone)]
enum Constraint {
    /// Inclusive numeric bounds; `None` leaves that side open
    Range {
        field: &'static str,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Case-sensitive equality. Unknown values match nothing rather
    /// than failing compilation.
    Equals { field: &'static str, value: String },
}

/// A compiled filter: pure, side-effect free, evaluable any number of
/// times against entries of the catalog it was compiled for.
#[derive(Debug, Clone, Default)]
pub struct CompiledFilter {
    constraints: Vec<Constraint>,
}

impl CompiledFilter {
    /// Whether the entry satisfies every constraint. Unselectable
    /// entries never match; constraints on fields the entry does not
    /// expose are ignored.
    pub fn matches<T: Filterable>(&self, entry: &T) -> bool {
        if !entry.selectable() {
            return false;
        }

        self.constraints.iter().all(|constraint| match constraint {
            Constraint::Range { field, min, max } => match entry.field(field) {
                Some(FieldValue::Number(value)) => {
                    min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
                }
                Some(FieldValue::Text(_)) => false,
                None => true,
            },
            Constraint::Equals { field, value } => match entry.field(field) {
                Some(FieldValue::Text(text)) => text == value,
                Some(FieldValue::Number(_)) => false,
                None => true,
            },
        })
    }
}

/// Compile a filter request against a catalog schema.
///
/// Fails with [`SearchError::InvalidRange`] on the first supplied bound
/// pair with min > max; the whole compilation aborts, nothing partial
/// is returned.
pub fn compile(request: &FilterRequest, schema: &[FieldSpec]) -> SearchResult<CompiledFilter> {
    for axis in BOUND_AXES {
        if let (Some(min), Some(max)) = request.bounds(axis) {
            if min > max {
                return Err(SearchError::InvalidRange {
                    field: axis.to_string(),
                    min,
                    max,
                });
            }
        }
    }

    let mut constraints = Vec::new();

    for spec in schema {
        match spec.kind {
            AttributeKind::Range => {
                let (min, max) = request.bounds(spec.name);
                if min.is_some() || max.is_some() {
                    constraints.push(Constraint::Range {
                        field: spec.name,
                        min,
                        max,
                    });
                }
            }
            AttributeKind::Enum | AttributeKind::Exact => {
                if let Some(value) = request.text(spec.name) {
                    constraints.push(Constraint::Equals {
                        field: spec.name,
                        value: value.to_string(),
                    });
                }
            }
        }
    }

    Ok(CompiledFilter { constraints })
}
