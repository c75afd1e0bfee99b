//! The question catalog: the fixed, ordered set of checklist prompts.
//!
//! Catalogs are external content supplied by the hosting application as
//! JSON (see `data/catalog.sample.json`). The core never hard-codes the
//! catalog size or the number of locked entries; a catalog is valid as
//! long as its ids are positive and unique.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// One checklist prompt.
///
/// `id` is the stable identity of the prompt: it keys the answer map and
/// never depends on display order. `disabled` entries are shown but locked
/// out of both toggling and scoring.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(default, rename = "defaultChecked")]
    pub default_checked: bool,
    #[serde(default)]
    pub disabled: bool,
}

/// Catalog construction/loading failures.
///
/// These are real errors, unlike malformed share parameters which are
/// silently treated as absent.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question id 0 is not allowed (ids must be positive)")]
    ZeroId,
    #[error("duplicate question id {0}")]
    DuplicateId(u32),
}

/// Ordered, validated list of prompts.
#[derive(Clone, Debug)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Validate and wrap a question list. Ids must be positive and unique.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::with_capacity(questions.len());
        for q in &questions {
            if q.id == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(q.id) {
                return Err(CatalogError::DuplicateId(q.id));
            }
        }
        Ok(Self { questions })
    }

    /// Load a catalog from a JSON file (array of questions).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let questions: Vec<Question> = serde_json::from_str(&content)?;
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All prompts in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Prompts that participate in scoring (not locked).
    pub fn enabled(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| !q.disabled)
    }

    pub fn enabled_count(&self) -> u32 {
        self.enabled().count() as u32
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
