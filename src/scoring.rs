//! The score engine: purity score = enabled questions left unchecked.
//!
//! Both functions are total over any well-formed answer state and have no
//! side effects. The controller calls them only at submit time; nothing
//! here caches or memoizes — the catalog is small enough that recomputing
//! beats ever showing a stale derived value.

use crate::answers::AnswerState;
use crate::catalog::Catalog;

/// Number of enabled questions currently checked.
pub fn checked_count(catalog: &Catalog, answers: &AnswerState) -> u32 {
    catalog
        .enabled()
        .filter(|q| answers.is_checked(q.id))
        .count() as u32
}

/// Purity score: enabled count minus checked count.
/// Always in `[0, enabled_count]`; 0-100 for the canonical catalog.
pub fn compute_score(catalog: &Catalog, answers: &AnswerState) -> u32 {
    catalog.enabled_count() - checked_count(catalog, answers)
}
