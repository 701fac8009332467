//! Configuration file discovery and loading.

use crate::config::merger::merge_layers;
use crate::config::schema::PrereqsConfig;
use crate::config::validator::validate;
use crate::error::{PrereqError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding project configuration and caches.
pub const CONFIG_DIR: &str = ".prereqs";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .prereqs/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .prereqs/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// All existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }

    /// Check if any config file exists.
    pub fn is_empty(&self) -> bool {
        self.project.is_none() && self.project_local.is_none()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// A `.prereqs` directory wins; a `.git` directory is the fallback.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as raw YAML for merging.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PrereqError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PrereqError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| PrereqError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn from_layers(layers: &[serde_yaml::Value], source: &Path) -> Result<PrereqsConfig> {
    serde_yaml::from_value(merge_layers(layers)).map_err(|e| PrereqError::ConfigParseError {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file without merging.
pub fn load_config_file(path: &Path) -> Result<PrereqsConfig> {
    let value = load_config_value(path)?;
    from_layers(&[value], path)
}

/// Load and merge `.prereqs/config.yml` and `.prereqs/config.local.yml`.
///
/// A project with neither file gets the default configuration.
pub fn load_merged_config(project_root: &Path) -> Result<PrereqsConfig> {
    let paths = ConfigPaths::discover(project_root);

    if paths.is_empty() {
        debug!("No config under {}, using defaults", project_root.display());
        return Ok(PrereqsConfig::default());
    }

    let layers = paths
        .all_existing()
        .into_iter()
        .map(|path| load_config_value(path))
        .collect::<Result<Vec<_>>>()?;

    from_layers(&layers, &project_root.join(CONFIG_DIR).join("config.yml"))
}

/// Load config with optional path override, then validate it.
///
/// If `config_override` is given only that file is read; otherwise the
/// project files are discovered and merged.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PrereqsConfig> {
    let config = match config_override {
        Some(path) => load_config_file(path)?,
        None => load_merged_config(project_root)?,
    };
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(root: &Path, name: &str, content: &str) {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn discover_finds_both_files() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "");
        write_config(temp.path(), "config.local.yml", "");

        let paths = ConfigPaths::discover(temp.path());
        assert_eq!(paths.all_existing().len(), 2);
        assert!(paths.all_existing()[1].ends_with("config.local.yml"));
    }

    #[test]
    fn discover_without_files_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(ConfigPaths::discover(temp.path()).is_empty());
    }

    #[test]
    fn find_project_root_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(temp.path().join(CONFIG_DIR)).unwrap();

        assert_eq!(find_project_root(&nested), Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_prefers_config_dir_over_git() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("dept");
        fs::create_dir_all(nested.join(CONFIG_DIR)).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();

        assert_eq!(find_project_root(&nested), Some(nested));
    }

    #[test]
    fn missing_config_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, PrereqsConfig::default());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "");
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, PrereqsConfig::default());
    }

    #[test]
    fn local_overrides_project() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "config.yml",
            "description_limit: 50\ncatalog:\n  path: data/courses.json",
        );
        write_config(temp.path(), "config.local.yml", "description_limit: 70");

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.description_limit, 70);
        assert_eq!(config.catalog.path, PathBuf::from("data/courses.json"));
    }

    #[test]
    fn override_skips_discovery() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "description_limit: 50");
        let other = temp.path().join("other.yml");
        fs::write(&other, "strict: true").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert!(config.strict);
        assert_eq!(config.description_limit, 100);
    }

    #[test]
    fn override_must_exist() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(&temp.path().join("nope.yml")));
        assert!(matches!(result, Err(PrereqError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "levels: [");
        let result = load_config(temp.path(), None);
        assert!(matches!(result, Err(PrereqError::ConfigParseError { .. })));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "config.yml", "description_limit: 0");
        let result = load_config(temp.path(), None);
        assert!(matches!(
            result,
            Err(PrereqError::ConfigValidationError { .. })
        ));
    }
}
