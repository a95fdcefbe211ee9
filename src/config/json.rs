//! JSON ingestion for variant configurations.
//!
//! Parsing is tolerant: well-formed entries are kept, malformed entries are
//! dropped and reported as [`ValidationIssue`]s. A configuration is always
//! produced, even from hopeless input.

use serde_json::Value;

use crate::style::{StyleGroup, StyleValue, ValidationIssue};

use super::model::{ComponentConfig, VariantConfig};

/// The JSON type name used in diagnostics.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Converts one JSON entry into a [`StyleValue`], recursing into objects.
///
/// Strings become literals and objects become groups. Anything else is
/// reported under its dotted path and dropped; the surrounding group keeps
/// its valid siblings.
fn style_value_from_json(
    raw: &Value,
    component: &str,
    path: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<StyleValue> {
    match raw {
        Value::String(text) => Some(StyleValue::from(text.as_str())),
        Value::Object(entries) => {
            let mut group = StyleGroup::new();
            for (key, entry) in entries {
                let child_path = format!("{path}.{key}");
                if let Some(value) = style_value_from_json(entry, component, &child_path, issues) {
                    group = group.add(key.clone(), value);
                }
            }
            Some(StyleValue::from(group))
        }
        other => {
            issues.push(ValidationIssue::InvalidVariantType {
                component: component.to_string(),
                variant: path.to_string(),
                found: json_kind(other).to_string(),
            });
            None
        }
    }
}

impl VariantConfig {
    /// Builds a configuration from parsed JSON, collecting issues instead
    /// of failing.
    ///
    /// The expected shape is an object of objects: component names mapping
    /// to variant names mapping to class strings or nested objects. Document
    /// order is preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use attire::VariantConfig;
    /// use serde_json::json;
    ///
    /// let (config, issues) = VariantConfig::from_json(&json!({
    ///     "button": {
    ///         "default": "bg-gray-100 text-gray-900",
    ///         "primary": "bg-blue-600 text-white"
    ///     }
    /// }));
    ///
    /// assert!(issues.is_empty());
    /// assert!(config.component("button").unwrap().has_default());
    /// ```
    pub fn from_json(value: &Value) -> (Self, Vec<ValidationIssue>) {
        let mut issues = Vec::new();

        let Some(root) = value.as_object() else {
            issues.push(ValidationIssue::ConfigurationInvalid {
                scope: "configuration".to_string(),
                found: json_kind(value).to_string(),
            });
            return (Self::new(), issues);
        };

        let mut config = Self::new();
        for (name, entry) in root {
            let Some(variants) = entry.as_object() else {
                issues.push(ValidationIssue::ConfigurationInvalid {
                    scope: format!("component `{name}`"),
                    found: json_kind(entry).to_string(),
                });
                continue;
            };

            let mut component = ComponentConfig::new();
            for (variant, raw) in variants {
                if let Some(value) = style_value_from_json(raw, name, variant, &mut issues) {
                    component = component.add(variant.clone(), value);
                }
            }
            config = config.add(name.clone(), component);
        }

        (config, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_and_nested_objects() {
        let (config, issues) = VariantConfig::from_json(&json!({
            "button": {
                "default": "bg-gray-100",
                "sizes": { "default": "px-4 py-2", "sm": "px-3 py-1.5" }
            }
        }));

        assert!(issues.is_empty());
        let button = config.component("button").unwrap();
        assert_eq!(button.get("default").unwrap().resolve().unwrap(), "bg-gray-100");
        // The group stands in for its `default` entry.
        assert_eq!(button.get("sizes").unwrap().resolve().unwrap(), "px-4 py-2");
    }

    #[test]
    fn test_document_order_is_preserved() {
        let (config, _) = VariantConfig::from_json(&json!({
            "card": { "default": "rounded" },
            "alert": { "default": "p-4" },
            "badge": { "default": "text-xs" }
        }));
        assert_eq!(config.component_names(), vec!["card", "alert", "badge"]);
    }

    #[test]
    fn test_non_object_root_yields_empty_config() {
        let (config, issues) = VariantConfig::from_json(&json!(["button"]));
        assert!(config.is_empty());
        assert_eq!(
            issues,
            vec![ValidationIssue::ConfigurationInvalid {
                scope: "configuration".to_string(),
                found: "array".to_string(),
            }]
        );

        let (config, issues) = VariantConfig::from_json(&Value::Null);
        assert!(config.is_empty());
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_non_object_component_is_dropped() {
        let (config, issues) = VariantConfig::from_json(&json!({
            "button": "bg-blue-600",
            "badge": { "default": "text-xs" }
        }));

        assert!(!config.contains("button"));
        assert!(config.contains("badge"));
        assert_eq!(
            issues,
            vec![ValidationIssue::ConfigurationInvalid {
                scope: "component `button`".to_string(),
                found: "string".to_string(),
            }]
        );
    }

    #[test]
    fn test_invalid_variant_is_dropped_siblings_kept() {
        let (config, issues) = VariantConfig::from_json(&json!({
            "badge": { "default": "text-xs", "count": 3 }
        }));

        let badge = config.component("badge").unwrap();
        assert!(badge.contains("default"));
        assert!(!badge.contains("count"));
        assert_eq!(
            issues,
            vec![ValidationIssue::InvalidVariantType {
                component: "badge".to_string(),
                variant: "count".to_string(),
                found: "number".to_string(),
            }]
        );
    }

    #[test]
    fn test_nested_invalid_leaf_reports_dotted_path() {
        let (config, issues) = VariantConfig::from_json(&json!({
            "button": {
                "sizes": { "default": "px-4", "sm": true }
            }
        }));

        assert_eq!(
            issues,
            vec![ValidationIssue::InvalidVariantType {
                component: "button".to_string(),
                variant: "sizes.sm".to_string(),
                found: "boolean".to_string(),
            }]
        );
        // The valid sibling survives.
        let button = config.component("button").unwrap();
        assert_eq!(button.get("sizes").unwrap().resolve().unwrap(), "px-4");
    }

    #[test]
    fn test_empty_object_is_valid_and_empty() {
        let (config, issues) = VariantConfig::from_json(&json!({}));
        assert!(config.is_empty());
        assert!(issues.is_empty());
    }
}
