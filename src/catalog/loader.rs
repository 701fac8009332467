//! Catalog file loading.
//!
//! Catalogs are JSON arrays of [`CourseRecord`]s. Files ending in `.yml` or
//! `.yaml` are read as YAML sequences with the same fields.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::course::Normalizer;
use crate::error::{PrereqError, Result};

use super::schema::{Catalog, CourseRecord};

/// Serialized catalog formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick a format from a file extension. Anything but YAML is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Decode catalog records.
///
/// `source_name` is only used in error messages.
pub fn parse_records(
    content: &str,
    format: CatalogFormat,
    source_name: &str,
) -> Result<Vec<CourseRecord>> {
    let parsed = match format {
        CatalogFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| PrereqError::CatalogParseError {
        source_name: source_name.to_string(),
        message,
    })
}

/// Decode catalog content into a [`Catalog`].
pub fn parse_catalog(
    content: &str,
    format: CatalogFormat,
    source_name: &str,
    normalizer: &Normalizer,
) -> Result<Catalog> {
    let records = parse_records(content, format, source_name)?;
    Ok(Catalog::from_records(records, normalizer))
}

/// Load a catalog file.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
/// Returns `CatalogParseError` if it can't be decoded.
pub fn load_catalog_file(path: &Path, normalizer: &Normalizer) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PrereqError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PrereqError::Io(e)
        }
    })?;

    let catalog = parse_catalog(
        &content,
        CatalogFormat::from_path(path),
        &path.display().to_string(),
        normalizer,
    )?;
    info!("Loaded {} courses from {}", catalog.len(), path.display());
    Ok(catalog)
}
