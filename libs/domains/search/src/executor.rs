//! Query executor.
//!
//! Evaluates a compiled filter against a full candidate snapshot. The
//! original insertion order is preserved for matches; there is no
//! re-sorting and no pagination. An empty result is success, and the
//! executor itself cannot fail given a compiled filter.

use crate::compiler::CompiledFilter;
use crate::schema::Filterable;

/// Keep every candidate the filter matches, in the order given.
pub fn execute<T: Filterable + Clone>(filter: &CompiledFilter, candidates: &[T]) -> Vec<T> {
    candidates
        .iter()
        .filter(|entry| filter.matches(*entry))
        .cloned()
        .collect()
}
