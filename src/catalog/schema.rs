//! Catalog record and course definitions.
//!
//! [`CourseRecord`] mirrors the JSON produced by the catalog scraper;
//! [`Course`] is the in-memory form with a canonical code.

use serde::{Deserialize, Serialize};

use crate::course::{CourseCode, Normalizer};

/// One course as stored in a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseRecord {
    /// Course code as printed, e.g. `CS 334`
    pub course_code: String,

    /// Course title
    pub course_name: String,

    /// Full catalog description
    pub description: String,

    /// Free-text prerequisite description
    pub requisites: String,

    /// Credit hours, as printed
    #[serde(skip_serializing_if = "String::is_empty")]
    pub credit_hours: String,

    /// General education requirement codes
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ger: String,

    /// Cross-listed courses, as printed
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cross_listed: String,
}

/// A catalog entry with its code canonicalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: CourseCode,
    pub name: String,
    pub description: String,
    pub raw_prerequisites: String,
    pub credit_hours: String,
    pub ger: String,
    pub cross_listed: String,
}

impl Course {
    /// Convert a stored record, canonicalizing its code.
    pub fn from_record(record: CourseRecord, normalizer: &Normalizer) -> Self {
        Self {
            code: normalizer.normalize(&record.course_code),
            name: record.course_name,
            description: record.description,
            raw_prerequisites: record.requisites,
            credit_hours: record.credit_hours,
            ger: record.ger,
            cross_listed: record.cross_listed,
        }
    }
}

/// The full, read-only course list in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build from already converted courses.
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Build from stored records, preserving their order.
    pub fn from_records(records: Vec<CourseRecord>, normalizer: &Normalizer) -> Self {
        Self::new(
            records
                .into_iter()
                .map(|r| Course::from_record(r, normalizer))
                .collect(),
        )
    }

    /// Courses in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// First course with the given canonical code.
    pub fn find(&self, code: &CourseCode) -> Option<&Course> {
        self.courses.iter().find(|c| &c.code == code)
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
