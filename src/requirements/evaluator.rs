//! Eligibility evaluation against a student's completed courses.

use std::collections::HashSet;

use serde::Serialize;

use crate::course::{CourseCode, Normalizer};

use super::{Requirement, RequirementGroup};

/// One student's completed courses, canonicalized.
///
/// Built fresh per query from caller-supplied strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedSet {
    codes: HashSet<CourseCode>,
}

impl CompletedSet {
    /// Normalize raw course strings. Blank entries are skipped.
    pub fn from_raw<I, S>(normalizer: &Normalizer, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = raw
            .into_iter()
            .filter(|s| !s.as_ref().trim().is_empty())
            .map(|s| normalizer.normalize(s.as_ref()))
            .collect();
        Self { codes }
    }

    /// Whether `code` has been completed.
    pub fn contains(&self, code: &CourseCode) -> bool {
        self.codes.contains(code)
    }

    /// Whether at least one alternative of `group` has been completed.
    pub fn satisfies(&self, group: &RequirementGroup) -> bool {
        group.alternatives().any(|code| self.contains(code))
    }

    /// Number of distinct completed courses.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether nothing has been completed.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Completed codes in sorted order.
    pub fn sorted(&self) -> Vec<&CourseCode> {
        let mut codes: Vec<_> = self.codes.iter().collect();
        codes.sort();
        codes
    }
}

/// Outcome of checking one requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    /// True when every group is satisfied.
    pub eligible: bool,
    /// Unsatisfied groups, in requirement order.
    pub missing_groups: Vec<RequirementGroup>,
}

/// Check every group of `requirement`; all failing groups are reported.
pub fn check_eligibility(completed: &CompletedSet, requirement: &Requirement) -> EligibilityResult {
    let missing_groups: Vec<RequirementGroup> = requirement
        .groups()
        .iter()
        .filter(|group| !completed.satisfies(group))
        .cloned()
        .collect();

    EligibilityResult {
        eligible: missing_groups.is_empty(),
        missing_groups,
    }
}
