//! Project configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use prereqs::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".prereqs");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "equivalences:\n  QTM_OX 110: QTM 110").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let normalizer = config.normalizer();
//! assert_eq!(normalizer.normalize("qtm_ox 110").as_str(), "QTM 110");
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.prereqs/config.yml`)
//! 2. Local overrides (`.prereqs/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_layers};
pub use schema::{CatalogSettings, OutputMode, PrereqsConfig, ServerSettings};
pub use validator::{validate, validate_config, ValidationError};
