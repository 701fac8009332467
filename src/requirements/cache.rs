//! Memoized prerequisite parsing.
//!
//! Catalog text never changes while the process runs, so each distinct
//! requisite string is parsed at most once. Entries are filled lazily and
//! read concurrently by every query.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::{PrerequisiteParser, Requirement};

/// Lazily populated map from raw requisite text to its parsed form.
#[derive(Debug, Default)]
pub struct ParseCache {
    entries: RwLock<HashMap<String, Arc<Requirement>>>,
}

impl ParseCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached requirement for `raw`, parsing it on first use.
    pub fn get_or_parse(&self, parser: &PrerequisiteParser, raw: &str) -> Arc<Requirement> {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(hit) = entries.get(raw) {
                return Arc::clone(hit);
            }
        }

        let parsed = Arc::new(parser.parse(raw));
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        debug!("Caching parsed requisites ({} entries)", entries.len() + 1);
        Arc::clone(entries.entry(raw.to_string()).or_insert(parsed))
    }

    /// Number of cached strings.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been parsed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
