//! Canonical course codes.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// A canonical course identifier such as `CS 170` or `CS 224Z`.
///
/// Values are produced by [`Normalizer::normalize`](super::Normalizer::normalize),
/// so two codes compare equal exactly when their canonical strings match.
/// Malformed input still yields a code; it simply never matches anything real.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    /// Wrap a string that is already in canonical form.
    ///
    /// No trimming, case folding, or equivalence lookup is applied.
    pub fn from_canonical(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Department token, e.g. `CS` or `MATH_OX`.
    pub fn department(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or("")
    }

    /// Number token including any letter suffix, e.g. `224Z`.
    pub fn number(&self) -> Option<&str> {
        self.0.split_whitespace().nth(1)
    }

    /// Level bucket derived from the first digit of the number (`"2"` → `"200"`).
    pub fn level(&self) -> Option<String> {
        let first = self.number()?.chars().next()?;
        first.is_ascii_digit().then(|| format!("{}00", first))
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CourseCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
