//! Level bucketing for presentation.
//!
//! Courses are grouped by the first digit of their number (`CS 253` → `200`).
//! Codes that fall outside the configured buckets are left out of grouped
//! views; raw query lists still contain them.

use std::collections::BTreeMap;

use serde::Serialize;

use super::query::EligibleCourse;

/// Default level buckets.
pub const DEFAULT_LEVELS: &[&str] = &["100", "200", "300", "400"];

/// Eligible courses sharing one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelGroup {
    pub level: String,
    pub courses: Vec<EligibleCourse>,
}

/// Bucket courses into `levels`, in the order the levels are given.
///
/// Input order is preserved within a bucket. Every level appears in the
/// output, even when empty.
pub fn group_by_level(courses: &[EligibleCourse], levels: &[String]) -> Vec<LevelGroup> {
    let mut groups: Vec<LevelGroup> = levels
        .iter()
        .map(|level| LevelGroup {
            level: level.clone(),
            courses: Vec::new(),
        })
        .collect();

    for course in courses {
        let Some(level) = course.code.level() else {
            continue;
        };
        if let Some(group) = groups.iter_mut().find(|g| g.level == level) {
            group.courses.push(course.clone());
        }
    }

    groups
}

/// Same buckets keyed by level, for JSON responses.
pub fn level_map(courses: &[EligibleCourse], levels: &[String]) -> BTreeMap<String, Vec<EligibleCourse>> {
    group_by_level(courses, levels)
        .into_iter()
        .map(|g| (g.level, g.courses))
        .collect()
}

/// The default buckets as owned strings.
pub fn default_levels() -> Vec<String> {
    DEFAULT_LEVELS.iter().map(|l| l.to_string()).collect()
}
