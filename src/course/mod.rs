//! Course identifiers and campus-variant canonicalization.
//!
//! - [`code`] - The canonical [`CourseCode`] value type
//! - [`equivalence`] - The [`EquivalenceTable`] and the [`Normalizer`] built on it
//!
//! # Example
//!
//! ```
//! use prereqs::course::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! assert_eq!(normalizer.normalize(" cs_ox 224 "), normalizer.normalize("CS 224"));
//! assert_eq!(normalizer.normalize("math 221").as_str(), "MATH 221");
//! ```

pub mod code;
pub mod equivalence;

pub use code::CourseCode;
pub use equivalence::{EquivalenceTable, Normalizer, BUILTIN_EQUIVALENCES};
