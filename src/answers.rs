//! Answer state: one boolean per catalog entry, keyed by question id.
//!
//! Invariant: the map holds exactly one entry per catalog id at all times,
//! including locked entries (whose value stays at the default). Resets
//! always produce a fresh map so the seeded defaults can never be mutated
//! through a later toggle.

use std::collections::BTreeMap;

use crate::catalog::Catalog;

/// Mapping from question id to "experienced this".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerState {
    answers: BTreeMap<u32, bool>,
}

impl AnswerState {
    /// Seed from the catalog defaults (`default_checked` per question).
    pub fn from_defaults(catalog: &Catalog) -> Self {
        let answers = catalog.iter().map(|q| (q.id, q.default_checked)).collect();
        Self { answers }
    }

    /// Whether the given question is currently checked.
    /// Unknown ids read as unchecked.
    pub fn is_checked(&self, id: u32) -> bool {
        self.answers.get(&id).copied().unwrap_or(false)
    }

    /// Flip one answer. The caller is responsible for the disabled check;
    /// ids outside the catalog are ignored to preserve the one-entry-per-id
    /// invariant.
    pub fn flip(&mut self, id: u32) {
        if let Some(v) = self.answers.get_mut(&id) {
            *v = !*v;
        }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
