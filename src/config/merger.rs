//! Layering of configuration files.
//!
//! `config.local.yml` is merged over `config.yml` before the result is
//! deserialized:
//!
//! - Mappings merge key by key, recursively
//! - Sequences (such as `levels`) are replaced, not concatenated
//! - A null value removes the key, restoring its default
//! - Any other overlay value replaces the base value

use serde_yaml::Value;

/// Merge `overlay` over `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order; later layers win.
///
/// Empty files parse to null and are skipped.
pub fn merge_layers(layers: &[Value]) -> Value {
    layers
        .iter()
        .filter(|layer| !layer.is_null())
        .fold(Value::Mapping(Default::default()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_mappings_merge() {
        let base = yaml("catalog:\n  path: a.json\n  timeout_secs: 5");
        let overlay = yaml("catalog:\n  path: b.json");
        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["catalog"]["path"], "b.json");
        assert_eq!(merged["catalog"]["timeout_secs"], 5);
    }

    #[test]
    fn sequences_are_replaced() {
        let base = yaml("levels: ['100', '200', '300']");
        let overlay = yaml("levels: ['500']");
        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged["levels"], yaml("['500']"));
    }

    #[test]
    fn null_removes_key() {
        let base = yaml("strict: true\ndescription_limit: 50");
        let overlay = yaml("strict: ~");
        let merged = deep_merge(&base, &overlay);
        assert!(merged.get("strict").is_none());
        assert_eq!(merged["description_limit"], 50);
    }

    #[test]
    fn merge_layers_skips_empty_files() {
        let merged = merge_layers(&[yaml("strict: true"), Value::Null]);
        assert_eq!(merged["strict"], true);
    }

    #[test]
    fn merge_layers_of_nothing_is_empty_mapping() {
        assert_eq!(merge_layers(&[]), Value::Mapping(Default::default()));
    }
}
