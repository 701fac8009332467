//! Configuration validation rules.
//!
//! - `description_limit` must be positive
//! - Levels must look like `100`, `200`, ...
//! - Equivalence entries must name both codes

use crate::config::schema::PrereqsConfig;
use crate::error::{PrereqError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Collect every validation error rather than stopping at the first.
pub fn validate_config(config: &PrereqsConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.description_limit == 0 {
        errors.push(ValidationError::new(
            "description-limit",
            "description_limit must be greater than zero".to_string(),
        ));
    }

    for level in &config.levels {
        if !is_level_bucket(level) {
            errors.push(ValidationError::new(
                "invalid-level",
                format!("Level '{}' must be a digit followed by \"00\"", level),
            ));
        }
    }

    for (variant, canonical) in &config.equivalences {
        if variant.trim().is_empty() || canonical.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-equivalence",
                format!(
                    "Equivalence '{}' → '{}' must name both courses",
                    variant, canonical
                ),
            ));
        }
    }

    if config.catalog.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "catalog-timeout",
            "catalog.timeout_secs must be greater than zero".to_string(),
        ));
    }

    errors
}

fn is_level_bucket(level: &str) -> bool {
    let bytes = level.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && &bytes[1..] == b"00"
}

/// Validate and fold all errors into one `ConfigValidationError`.
pub fn validate(config: &PrereqsConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(PrereqError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&PrereqsConfig::default()).is_ok());
    }

    #[test]
    fn rejects_zero_description_limit() {
        let config = PrereqsConfig {
            description_limit: 0,
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "description-limit");
    }

    #[test]
    fn rejects_malformed_levels() {
        let config = PrereqsConfig {
            levels: vec!["100".into(), "250".into(), "1000".into(), "x00".into()],
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.rule == "invalid-level"));
    }

    #[test]
    fn rejects_blank_equivalences() {
        let mut config = PrereqsConfig::default();
        config.equivalences.insert("CS_OX 170".into(), " ".into());
        let errors = validate_config(&config);
        assert_eq!(errors[0].rule, "empty-equivalence");
    }

    #[test]
    fn validate_joins_messages() {
        let config = PrereqsConfig {
            description_limit: 0,
            levels: vec!["abc".into()],
            ..Default::default()
        };
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("description_limit"));
        assert!(err.contains("abc"));
    }
}
