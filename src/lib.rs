//! prereqs - course prerequisite eligibility checking.
//!
//! Given a course catalog with free-text prerequisite descriptions and the
//! courses a student has completed, prereqs works out which courses the
//! student may take next and explains what is missing for the rest.
//!
//! # Modules
//!
//! - [`catalog`] - Catalog loading (file or URL) and catalog-wide queries
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`course`] - Course codes, campus equivalences, normalization
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Prerequisite parsing, evaluation, and explanations
//! - [`server`] - HTTP API
//! - [`ui`] - Prompts and terminal output
//!
//! # Example
//!
//! ```
//! use prereqs::course::Normalizer;
//! use prereqs::requirements::{check_eligibility, explain, CompletedSet, PrerequisiteParser};
//!
//! let parser = PrerequisiteParser::new(Normalizer::default());
//! let requirement = parser.parse("CS 171 and MATH 221 or MATH 275");
//! let completed = CompletedSet::from_raw(parser.normalizer(), ["cs_ox 171"]);
//!
//! let result = check_eligibility(&completed, &requirement);
//! assert!(!result.eligible);
//! assert_eq!(
//!     explain(&result.missing_groups),
//!     "Missing prerequisites:\n• One of: MATH 221 OR MATH 275"
//! );
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod course;
pub mod error;
pub mod requirements;
pub mod server;
pub mod ui;

pub use error::{PrereqError, Result};
