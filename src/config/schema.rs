//! Configuration schema definitions.
//!
//! These structs map to `.prereqs/config.yml`. Every field is optional;
//! an absent file behaves like an empty one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::catalog::levels::default_levels;
use crate::catalog::query::DEFAULT_DESCRIPTION_LIMIT;
use crate::catalog::remote::DEFAULT_TIMEOUT_SECS;
use crate::course::{EquivalenceTable, Normalizer};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrereqsConfig {
    /// Where the course catalog comes from
    pub catalog: CatalogSettings,

    /// Start from the built-in Oxford campus equivalences
    #[serde(skip_serializing_if = "is_true")]
    pub builtin_equivalences: bool,

    /// Extra variant → canonical course equivalences
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub equivalences: BTreeMap<String, String>,

    /// Characters of description shown for eligible courses
    pub description_limit: usize,

    /// Level buckets used by grouped views
    pub levels: Vec<String>,

    /// Report requisite text that names no course instead of treating it as open
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,

    /// Default output mode when no CLI flag is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,

    /// HTTP server settings
    pub server: ServerSettings,
}

impl Default for PrereqsConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings::default(),
            builtin_equivalences: true,
            equivalences: BTreeMap::new(),
            description_limit: DEFAULT_DESCRIPTION_LIMIT,
            levels: default_levels(),
            strict: false,
            default_output: None,
            server: ServerSettings::default(),
        }
    }
}

impl PrereqsConfig {
    /// The equivalence table described by this config.
    ///
    /// Configured pairs are applied over the built-in table unless
    /// `builtin_equivalences` is false.
    pub fn equivalence_table(&self) -> EquivalenceTable {
        let mut table = if self.builtin_equivalences {
            EquivalenceTable::builtin()
        } else {
            EquivalenceTable::empty()
        };
        for (variant, canonical) in &self.equivalences {
            table.insert(variant, canonical);
        }
        table
    }

    /// A normalizer over [`equivalence_table`](Self::equivalence_table).
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.equivalence_table())
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog file, relative to the project root
    pub path: PathBuf,

    /// Remote catalog URL; takes precedence over `path` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Request timeout for remote catalogs
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("cs_courses.json"),
            url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address to bind, e.g. `127.0.0.1:5000`
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
        }
    }
}

/// Output verbosity as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}

fn is_false(v: &bool) -> bool {
    !v
}

fn is_true(v: &bool) -> bool {
    *v
}
