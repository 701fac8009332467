//! Catalog-wide eligibility queries.
//!
//! [`CourseFinder`] is the only component that walks the whole catalog.
//! It is immutable apart from its parse cache, so one instance can serve
//! concurrent queries.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::course::{CourseCode, Normalizer};
use crate::error::{PrereqError, Result};
use crate::requirements::{
    check_eligibility, explain, is_declared_empty, CompletedSet, EligibilityResult, ParseCache,
    PrerequisiteParser, Requirement, RequirementGroup,
};

use super::schema::{Catalog, Course};

/// Default description length shown for eligible courses.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 100;

/// Appended to truncated descriptions.
pub const CONTINUATION_MARKER: &str = "...";

/// An eligible course, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibleCourse {
    pub code: CourseCode,
    pub name: String,
    /// Description capped at the finder's limit.
    pub description: String,
}

/// A course the student cannot take yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IneligibleCourse {
    pub code: CourseCode,
    pub name: String,
    /// Unsatisfied groups, unformatted.
    pub missing: Vec<RequirementGroup>,
}

/// A course whose requisite text names no course, reported in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnparsedCourse {
    pub code: CourseCode,
    pub name: String,
    pub requisites: String,
}

/// Result of [`CourseFinder::find_eligible`]. All lists keep catalog order.
///
/// `unparsed` is only filled by a strict finder; those courses appear in
/// neither of the other lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub eligible: Vec<EligibleCourse>,
    pub ineligible: Vec<IneligibleCourse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unparsed: Vec<UnparsedCourse>,
}

/// Eligibility of a single course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseCheck {
    pub code: CourseCode,
    pub name: String,
    /// Whether the student already completed this course.
    pub already_completed: bool,
    pub requirement: Requirement,
    pub result: EligibilityResult,
}

impl CourseCheck {
    /// Formatted explanation of the missing groups.
    pub fn explanation(&self) -> String {
        explain(&self.result.missing_groups)
    }
}

/// Cap `text` at `limit` characters, appending [`CONTINUATION_MARKER`] if cut.
pub fn truncate_description(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut truncated: String = text.chars().take(limit).collect();
        truncated.push_str(CONTINUATION_MARKER);
        truncated
    } else {
        text.to_string()
    }
}

/// Answers eligibility questions over a static catalog.
#[derive(Debug)]
pub struct CourseFinder {
    catalog: Catalog,
    parser: PrerequisiteParser,
    cache: ParseCache,
    description_limit: usize,
    strict: bool,
}

impl CourseFinder {
    /// Create a finder with the default description limit.
    pub fn new(catalog: Catalog, parser: PrerequisiteParser) -> Self {
        Self {
            catalog,
            parser,
            cache: ParseCache::new(),
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
            strict: false,
        }
    }

    /// Report courses with unreadable requisites instead of treating them
    /// as open.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether unreadable requisites are reported.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Override the description limit.
    pub fn with_description_limit(mut self, limit: usize) -> Self {
        self.description_limit = limit;
        self
    }

    /// The catalog being queried.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The parser used for requisite text.
    pub fn parser(&self) -> &PrerequisiteParser {
        &self.parser
    }

    /// The normalizer shared by parsing and completed-set construction.
    pub fn normalizer(&self) -> &Normalizer {
        self.parser.normalizer()
    }

    /// The description limit in characters.
    pub fn description_limit(&self) -> usize {
        self.description_limit
    }

    /// Normalize caller-supplied course strings.
    pub fn completed_set<S: AsRef<str>>(&self, completed: &[S]) -> CompletedSet {
        CompletedSet::from_raw(self.normalizer(), completed)
    }

    /// Parsed requirement for a course (memoized by requisite text).
    pub fn requirement_for(&self, course: &Course) -> Arc<Requirement> {
        self.cache.get_or_parse(&self.parser, &course.raw_prerequisites)
    }

    /// Classify every catalog course the student hasn't completed.
    pub fn find_eligible<S: AsRef<str>>(&self, completed: &[S]) -> QueryResult {
        self.find_eligible_in(&self.completed_set(completed))
    }

    /// Same as [`find_eligible`](Self::find_eligible) with a prepared set.
    pub fn find_eligible_in(&self, completed: &CompletedSet) -> QueryResult {
        let mut result = QueryResult::default();

        for course in self.catalog.courses() {
            if completed.contains(&course.code) {
                continue;
            }

            let requirement = self.requirement_for(course);
            if self.strict && self.is_unparsed(course, &requirement) {
                warn!("No course codes found in requisites for {}", course.code);
                result.unparsed.push(UnparsedCourse {
                    code: course.code.clone(),
                    name: course.name.clone(),
                    requisites: course.raw_prerequisites.clone(),
                });
                continue;
            }

            let outcome = check_eligibility(completed, &requirement);
            if outcome.eligible {
                result.eligible.push(EligibleCourse {
                    code: course.code.clone(),
                    name: course.name.clone(),
                    description: truncate_description(&course.description, self.description_limit),
                });
            } else {
                result.ineligible.push(IneligibleCourse {
                    code: course.code.clone(),
                    name: course.name.clone(),
                    missing: outcome.missing_groups,
                });
            }
        }

        debug!(
            "Query over {} completed course(s): {} eligible, {} ineligible",
            completed.len(),
            result.eligible.len(),
            result.ineligible.len()
        );
        result
    }

    /// Evaluate a single course by code.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCourse` if the code isn't in the catalog.
    pub fn check_course<S: AsRef<str>>(&self, code: &str, completed: &[S]) -> Result<CourseCheck> {
        let wanted = self.normalizer().normalize(code);
        let course = self
            .catalog
            .find(&wanted)
            .ok_or_else(|| PrereqError::UnknownCourse {
                code: wanted.to_string(),
            })?;

        let requirement = self.requirement_for(course);
        if self.strict && self.is_unparsed(course, &requirement) {
            warn!("No course codes found in requisites for {}", course.code);
            return Err(PrereqError::UnparsedRequisites {
                course: course.code.to_string(),
                text: course.raw_prerequisites.clone(),
            });
        }

        let completed = self.completed_set(completed);
        let result = check_eligibility(&completed, &requirement);

        Ok(CourseCheck {
            code: course.code.clone(),
            name: course.name.clone(),
            already_completed: completed.contains(&course.code),
            requirement: (*requirement).clone(),
            result,
        })
    }

    /// Courses whose requisite text names no course at all.
    ///
    /// These read as "no prerequisites" in normal queries even though
    /// their catalog entry says something.
    pub fn unparsed_courses(&self) -> Vec<&Course> {
        self.catalog
            .courses()
            .iter()
            .filter(|course| self.is_unparsed(course, &self.requirement_for(course)))
            .collect()
    }

    fn is_unparsed(&self, course: &Course, requirement: &Requirement) -> bool {
        let raw = &course.raw_prerequisites;
        requirement.is_empty() && !is_declared_empty(raw) && !raw.trim().is_empty()
    }
}
