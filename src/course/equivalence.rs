//! Campus-variant equivalences and course code normalization.
//!
//! Oxford campus courses (`CS_OX 224`) count as their main campus
//! counterparts (`CS 224`). The table is built once, never mutated after
//! it is handed to a [`Normalizer`], and shared read-only between queries.

use std::collections::HashMap;
use std::sync::Arc;

use super::code::CourseCode;

/// Built-in variant → canonical pairs.
pub const BUILTIN_EQUIVALENCES: &[(&str, &str)] = &[
    ("CS_OX 170", "CS 170"),
    ("CS_OX 171", "CS 171"),
    ("CS_OX 224", "CS 224"),
    ("CS_OX 253", "CS 253"),
    ("MATH_OX 111", "MATH 111"),
    ("MATH_OX 221", "MATH 221"),
];

fn fold(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Mapping from variant course codes to their canonical codes.
///
/// Keys and values are stored trimmed and upper-cased. The table keeps
/// chains collapsed (no value is ever also a key), which is what makes
/// normalization idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquivalenceTable {
    entries: HashMap<String, CourseCode>,
}

impl EquivalenceTable {
    /// An empty table: every code is its own canonical form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in Oxford campus table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_EQUIVALENCES.iter().copied())
    }

    /// Build a table from `(variant, canonical)` pairs, applied in order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = Self::empty();
        for (variant, canonical) in pairs {
            table.insert(variant.as_ref(), canonical.as_ref());
        }
        table
    }

    /// Add or replace one equivalence.
    ///
    /// Mapping a code to itself removes any existing entry for it.
    pub fn insert(&mut self, variant: &str, canonical: &str) {
        let variant = fold(variant);
        let mut target = fold(canonical);
        if target != variant {
            if let Some(resolved) = self.entries.get(&target) {
                target = resolved.as_str().to_string();
            }
        }

        if target == variant {
            self.entries.remove(&variant);
            return;
        }

        for value in self.entries.values_mut() {
            if value.as_str() == variant {
                *value = CourseCode::from_canonical(target.clone());
            }
        }
        self.entries
            .insert(variant, CourseCode::from_canonical(target));
    }

    /// Look up an already trimmed, upper-cased code.
    pub fn lookup(&self, code: &str) -> Option<&CourseCode> {
        self.entries.get(code)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by variant code.
    pub fn sorted_entries(&self) -> Vec<(&str, &CourseCode)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort();
        entries
    }
}

/// Canonicalizes raw course code strings against an [`EquivalenceTable`].
///
/// Cloning is cheap; the table is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Normalizer {
    table: Arc<EquivalenceTable>,
}

impl Normalizer {
    /// Create a normalizer over the given table.
    pub fn new(table: EquivalenceTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// The table this normalizer consults.
    pub fn table(&self) -> &EquivalenceTable {
        &self.table
    }

    /// Trim, upper-case, then map through the equivalence table.
    ///
    /// Total over all input: unknown or malformed strings come back as
    /// their trimmed, upper-cased selves.
    pub fn normalize(&self, raw: &str) -> CourseCode {
        let key = fold(raw);
        match self.table.lookup(&key) {
            Some(canonical) => canonical.clone(),
            None => CourseCode::from_canonical(key),
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(EquivalenceTable::builtin())
    }
}
