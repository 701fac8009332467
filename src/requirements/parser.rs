//! Prerequisite text parsing.
//!
//! Catalog requisites are semi-structured English such as
//! `"(CS 224 or CS_OX 224) and (CS 253 or CS_OX 253) or equivalent transfer
//! credit as prerequisite."`. Parsing is deliberately a two-stage tokenizer
//! rather than a boolean expression grammar:
//!
//! 1. Noise phrases are removed and the text is split on the word `and`.
//! 2. Every course-code-shaped token in a segment becomes an alternative of
//!    that segment's group.
//!
//! Parentheses and the word `or` carry no meaning to the parser. Text in the
//! common `(A or B) and (C or D)` shape parses correctly because each
//! parenthesized list lands in its own segment; deeper nesting does not.
//! Segments without a course code are dropped, so text that mentions no
//! course at all reads as "no prerequisites". [`PrerequisiteParser::parse_strict`]
//! reports that case instead.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::course::Normalizer;
use crate::error::{PrereqError, Result};

use super::{Requirement, RequirementGroup};

/// Literal requisite text meaning "no prerequisites".
pub const NO_PREREQUISITES: &str = "None";

static TRANSFER_CREDIT_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"or equivalent transfer credit as (a )?prerequisite\.?")
        .expect("TRANSFER_CREDIT_NOISE must compile")
});

static COURSE_REQUIRES_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"this course requires?").expect("COURSE_REQUIRES_NOISE must compile")
});

static AND_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+and\s+").expect("AND_SEPARATOR must compile"));

/// Department, optional `_CAMPUS` suffix, whitespace, digits, optional letter.
static COURSE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([A-Z]+_?[A-Z]*\s+\d+[A-Z]?)\b").expect("COURSE_CODE must compile")
});

/// Whether the raw text explicitly declares no prerequisites.
///
/// Only the empty string and the exact literal `None` qualify.
pub fn is_declared_empty(raw: &str) -> bool {
    raw.is_empty() || raw == NO_PREREQUISITES
}

/// Parses requisite text into a [`Requirement`].
#[derive(Debug, Clone, Default)]
pub struct PrerequisiteParser {
    normalizer: Normalizer,
}

impl PrerequisiteParser {
    /// Create a parser that canonicalizes codes with `normalizer`.
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }

    /// The normalizer applied to extracted codes.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Parse requisite text. Never fails; unrecognized text yields no groups.
    pub fn parse(&self, raw: &str) -> Requirement {
        if is_declared_empty(raw) {
            return Requirement::none();
        }

        let text = raw.to_lowercase();
        let text = TRANSFER_CREDIT_NOISE.replace_all(&text, "");
        let text = COURSE_REQUIRES_NOISE.replace_all(&text, "");

        let groups: Vec<RequirementGroup> = AND_SEPARATOR
            .split(&text)
            .map(|segment| self.extract_group(segment))
            .filter(|group| !group.is_empty())
            .collect();

        debug!("Parsed {:?} into {} group(s)", raw, groups.len());
        Requirement::from_groups(groups)
    }

    /// Parse, but treat non-empty text that produced no groups as an error.
    ///
    /// `course` only labels the error.
    pub fn parse_strict(&self, course: &str, raw: &str) -> Result<Requirement> {
        let requirement = self.parse(raw);
        if requirement.is_empty() && !is_declared_empty(raw) && !raw.trim().is_empty() {
            warn!("No course codes found in requisites for {}", course);
            return Err(PrereqError::UnparsedRequisites {
                course: course.to_string(),
                text: raw.to_string(),
            });
        }
        Ok(requirement)
    }

    /// Collect every course code in one AND segment as OR alternatives.
    pub fn extract_group(&self, segment: &str) -> RequirementGroup {
        COURSE_CODE
            .find_iter(segment)
            .map(|m| self.normalizer.normalize(&m.as_str().to_uppercase()))
            .collect()
    }
}
