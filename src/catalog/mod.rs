//! Course catalogs and catalog-wide queries.
//!
//! - Record and course types in [`schema`]
//! - File decoding in [`loader`]
//! - Remote download with caching in [`remote`]
//! - Eligibility queries in [`query`]
//! - Level bucketing in [`levels`]
//!
//! # Example
//!
//! ```
//! use prereqs::catalog::{parse_catalog, CatalogFormat, CourseFinder};
//! use prereqs::course::Normalizer;
//! use prereqs::requirements::PrerequisiteParser;
//!
//! let json = r#"[
//!   {"course_code": "CS 170", "course_name": "Intro", "description": "", "requisites": "None"},
//!   {"course_code": "CS 171", "course_name": "Intro II", "description": "", "requisites": "CS 170"}
//! ]"#;
//! let normalizer = Normalizer::default();
//! let catalog = parse_catalog(json, CatalogFormat::Json, "inline", &normalizer).unwrap();
//! let finder = CourseFinder::new(catalog, PrerequisiteParser::new(normalizer));
//!
//! let result = finder.find_eligible(&["CS_OX 170"]);
//! assert_eq!(result.eligible[0].code.as_str(), "CS 171");
//! ```

pub mod levels;
pub mod loader;
pub mod query;
pub mod remote;
pub mod schema;

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::config::{PrereqsConfig, CONFIG_DIR};
use crate::error::Result;
use crate::requirements::PrerequisiteParser;

pub use levels::{default_levels, group_by_level, level_map, LevelGroup, DEFAULT_LEVELS};
pub use loader::{load_catalog_file, parse_catalog, parse_records, CatalogFormat};
pub use query::{
    truncate_description, CourseCheck, CourseFinder, EligibleCourse, IneligibleCourse,
    QueryResult, UnparsedCourse, CONTINUATION_MARKER, DEFAULT_DESCRIPTION_LIMIT,
};
pub use remote::{CatalogFetcher, DEFAULT_TIMEOUT_SECS};
pub use schema::{Catalog, Course, CourseRecord};

/// Where a catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Local JSON or YAML file.
    File(PathBuf),
    /// Remote JSON document.
    Url(String),
}

impl CatalogSource {
    /// Resolve the source for a project.
    ///
    /// An explicit path wins, then `catalog.url`, then `catalog.path`
    /// relative to `project_root`.
    pub fn resolve(config: &PrereqsConfig, project_root: &Path, explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path.to_path_buf());
        }
        if let Some(url) = &config.catalog.url {
            return Self::Url(url.clone());
        }
        Self::File(project_root.join(&config.catalog.path))
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Options for [`open_finder`].
#[derive(Debug, Clone, Default)]
pub struct OpenOptions<'a> {
    /// Catalog path overriding the configured source.
    pub catalog: Option<&'a Path>,
    /// Skip the download cache for remote catalogs.
    pub refresh: bool,
}

/// Load the catalog a project is configured for.
pub fn load_catalog(
    config: &PrereqsConfig,
    project_root: &Path,
    options: &OpenOptions<'_>,
) -> Result<Catalog> {
    let normalizer = config.normalizer();

    match CatalogSource::resolve(config, project_root, options.catalog) {
        CatalogSource::File(path) => load_catalog_file(&path, &normalizer),
        CatalogSource::Url(url) => {
            let fetcher = CatalogFetcher::new(
                Duration::from_secs(config.catalog.timeout_secs),
                project_root.join(CONFIG_DIR).join("cache"),
            )?;
            let content = if options.refresh {
                fetcher.refresh(&url)?
            } else {
                fetcher.fetch(&url)?
            };
            let catalog = parse_catalog(&content, CatalogFormat::Json, &url, &normalizer)?;
            info!("Loaded {} courses from {}", catalog.len(), url);
            Ok(catalog)
        }
    }
}

/// Build a [`CourseFinder`] from project configuration.
pub fn open_finder(
    config: &PrereqsConfig,
    project_root: &Path,
    options: &OpenOptions<'_>,
) -> Result<CourseFinder> {
    let catalog = load_catalog(config, project_root, options)?;
    let parser = PrerequisiteParser::new(config.normalizer());
    Ok(CourseFinder::new(catalog, parser)
        .with_description_limit(config.description_limit)
        .with_strict(config.strict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrereqError;
    use httpmock::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = r#"[
        {"course_code": "CS 170", "course_name": "Intro", "description": "Start here", "requisites": "None"},
        {"course_code": "CS 171", "course_name": "Intro II", "description": "Next", "requisites": "CS 170"}
    ]"#;

    #[test]
    fn resolve_prefers_explicit_path() {
        let mut config = PrereqsConfig::default();
        config.catalog.url = Some("https://example.edu/c.json".into());
        let source = CatalogSource::resolve(&config, Path::new("/p"), Some(Path::new("x.json")));
        assert_eq!(source, CatalogSource::File(PathBuf::from("x.json")));
    }

    #[test]
    fn resolve_uses_url_before_path() {
        let mut config = PrereqsConfig::default();
        config.catalog.url = Some("https://example.edu/c.json".into());
        let source = CatalogSource::resolve(&config, Path::new("/p"), None);
        assert_eq!(source, CatalogSource::Url("https://example.edu/c.json".into()));
    }

    #[test]
    fn resolve_defaults_to_project_relative_file() {
        let source = CatalogSource::resolve(&PrereqsConfig::default(), Path::new("/p"), None);
        assert_eq!(source, CatalogSource::File(PathBuf::from("/p/cs_courses.json")));
    }

    #[test]
    fn open_finder_reads_project_catalog() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("cs_courses.json"), CATALOG).unwrap();
        let config = PrereqsConfig {
            description_limit: 5,
            ..Default::default()
        };

        let finder = open_finder(&config, temp.path(), &OpenOptions::default()).unwrap();
        assert_eq!(finder.catalog().len(), 2);
        assert_eq!(finder.description_limit(), 5);
        let result = finder.find_eligible::<&str>(&[]);
        assert_eq!(result.eligible[0].description, "Start...");
    }

    #[test]
    fn open_finder_missing_catalog() {
        let temp = TempDir::new().unwrap();
        let result = open_finder(&PrereqsConfig::default(), temp.path(), &OpenOptions::default());
        assert!(matches!(result, Err(PrereqError::CatalogNotFound { .. })));
    }

    #[test]
    fn open_finder_fetches_remote_catalog_once() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/cs_courses.json");
            then.status(200).body(CATALOG);
        });

        let temp = TempDir::new().unwrap();
        let mut config = PrereqsConfig::default();
        config.catalog.url = Some(server.url("/cs_courses.json"));

        let first = open_finder(&config, temp.path(), &OpenOptions::default()).unwrap();
        let second = open_finder(&config, temp.path(), &OpenOptions::default()).unwrap();
        assert_eq!(first.catalog().len(), 2);
        assert_eq!(second.catalog().len(), 2);
        mock.assert_calls(1);

        let refresh = OpenOptions {
            refresh: true,
            ..Default::default()
        };
        open_finder(&config, temp.path(), &refresh).unwrap();
        mock.assert_calls(2);
    }
}
