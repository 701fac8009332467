//! Prerequisite expressions: parsing, evaluation, and explanation.
//!
//! A course's free-text requisites are reduced to a [`Requirement`]: an
//! ordered AND of [`RequirementGroup`]s, each group an OR of course codes.
//!
//! - [`parser`] - Text → [`Requirement`]
//! - [`evaluator`] - [`Requirement`] + [`CompletedSet`] → [`EligibilityResult`]
//! - [`explain`] - Missing groups → human-readable text
//! - [`cache`] - Memoized parsing for static catalog text
//!
//! # Example
//!
//! ```
//! use prereqs::course::Normalizer;
//! use prereqs::requirements::{check_eligibility, explain, CompletedSet, PrerequisiteParser};
//!
//! let parser = PrerequisiteParser::new(Normalizer::default());
//! let requirement = parser.parse("CS 171 and MATH 221 or MATH 275");
//! assert_eq!(requirement.len(), 2);
//!
//! let completed = CompletedSet::from_raw(parser.normalizer(), ["cs 171"]);
//! let result = check_eligibility(&completed, &requirement);
//! assert!(!result.eligible);
//! assert!(explain(&result.missing_groups).contains("One of: MATH 221 OR MATH 275"));
//! ```

pub mod cache;
pub mod evaluator;
pub mod explain;
pub mod parser;

pub use cache::ParseCache;
pub use evaluator::{check_eligibility, CompletedSet, EligibilityResult};
pub use explain::{describe_group, explain, MISSING_HEADER, NOTHING_MISSING};
pub use parser::{is_declared_empty, PrerequisiteParser, NO_PREREQUISITES};

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::course::CourseCode;

/// Alternatives of which at least one must be completed.
///
/// Backed by an ordered set so display order is deterministic and
/// duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequirementGroup(BTreeSet<CourseCode>);

impl RequirementGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alternative. Returns false if it was already present.
    pub fn insert(&mut self, code: CourseCode) -> bool {
        self.0.insert(code)
    }

    /// Alternatives in display order.
    pub fn alternatives(&self) -> impl Iterator<Item = &CourseCode> {
        self.0.iter()
    }

    /// Whether `code` is one of the alternatives.
    pub fn contains(&self, code: &CourseCode) -> bool {
        self.0.contains(code)
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the group has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<CourseCode> for RequirementGroup {
    fn from_iter<I: IntoIterator<Item = CourseCode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for RequirementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.0.iter().map(|c| c.as_str()).collect();
        f.write_str(&joined.join(" OR "))
    }
}

/// The AND of every group. Empty means "no prerequisites".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Requirement {
    groups: Vec<RequirementGroup>,
}

impl Requirement {
    /// A requirement with no groups; always satisfied.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from groups in AND order. Empty groups are discarded.
    pub fn from_groups(groups: Vec<RequirementGroup>) -> Self {
        Self {
            groups: groups.into_iter().filter(|g| !g.is_empty()).collect(),
        }
    }

    /// Groups in AND order.
    pub fn groups(&self) -> &[RequirementGroup] {
        &self.groups
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no prerequisites.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return f.write_str("(none)");
        }
        let parts: Vec<String> = self
            .groups
            .iter()
            .map(|g| {
                if g.len() > 1 {
                    format!("({})", g)
                } else {
                    g.to_string()
                }
            })
            .collect();
        f.write_str(&parts.join(" AND "))
    }
}
