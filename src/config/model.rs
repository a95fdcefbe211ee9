//! Typed configuration of components and their variants.

use indexmap::IndexMap;

use crate::style::{StyleValue, ValidationIssue, DEFAULT_VARIANT};

/// The variants of a single component, in insertion order.
///
/// Variant names map to [`StyleValue`]s. Adding a value under an existing
/// name replaces it.
#[derive(Debug, Clone, Default)]
pub struct ComponentConfig {
    variants: IndexMap<String, StyleValue>,
}

impl ComponentConfig {
    /// Creates an empty component.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variant, consuming and returning `self` for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, name: impl Into<String>, value: V) -> Self {
        self.variants.insert(name.into(), value.into());
        self
    }

    /// Looks up a variant by name.
    pub fn get(&self, variant: &str) -> Option<&StyleValue> {
        self.variants.get(variant)
    }

    /// Returns true if the component defines `variant`.
    pub fn contains(&self, variant: &str) -> bool {
        self.variants.contains_key(variant)
    }

    /// Returns true if the component has a `default` variant.
    pub fn has_default(&self) -> bool {
        self.variants.contains_key(DEFAULT_VARIANT)
    }

    /// The variant names, in insertion order.
    pub fn variant_names(&self) -> Vec<&str> {
        self.variants.keys().map(|name| name.as_str()).collect()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.variants.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// A full variant configuration: components mapped to their variants.
///
/// The configuration is plain data. Validation reports issues instead of
/// failing, and lookups against it happen through the resolver.
///
/// # Example
///
/// ```
/// use attire::{ComponentConfig, VariantConfig};
///
/// let config = VariantConfig::new().add(
///     "button",
///     ComponentConfig::new()
///         .add("default", "bg-gray-100 text-gray-900")
///         .add("primary", "bg-blue-600 text-white"),
/// );
///
/// assert!(config.contains("button"));
/// assert_eq!(config.component("button").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariantConfig {
    components: IndexMap<String, ComponentConfig>,
}

impl VariantConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component, consuming and returning `self` for chaining.
    /// An existing component under the same name is replaced.
    pub fn add(mut self, name: impl Into<String>, component: ComponentConfig) -> Self {
        self.components.insert(name.into(), component);
        self
    }

    /// Looks up a component by name.
    pub fn component(&self, name: &str) -> Option<&ComponentConfig> {
        self.components.get(name)
    }

    /// Returns true if the configuration defines `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// The component names, in insertion order.
    pub fn component_names(&self) -> Vec<&str> {
        self.components.keys().map(|name| name.as_str()).collect()
    }

    /// Iterates over `(name, component)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentConfig)> {
        self.components
            .iter()
            .map(|(name, component)| (name.as_str(), component))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Checks structural conventions and returns the issues found.
    ///
    /// Currently this flags components without a `default` variant. Issues
    /// are advisory; the configuration stays usable as-is.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for (name, component) in &self.components {
            if !component.has_default() {
                issues.push(ValidationIssue::MissingDefaultVariant {
                    component: name.clone(),
                });
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleGroup;

    fn sample_config() -> VariantConfig {
        VariantConfig::new()
            .add(
                "button",
                ComponentConfig::new()
                    .add("default", "bg-gray-100")
                    .add("primary", "bg-blue-600 text-white"),
            )
            .add("badge", ComponentConfig::new().add("dot", "h-2 w-2"))
    }

    #[test]
    fn test_component_lookup() {
        let config = sample_config();
        assert!(config.contains("button"));
        assert!(!config.contains("toast"));

        let button = config.component("button").unwrap();
        assert!(button.contains("primary"));
        assert!(button.has_default());
        assert!(button.get("secondary").is_none());
    }

    #[test]
    fn test_add_replaces_existing_variant() {
        let component = ComponentConfig::new()
            .add("default", "old")
            .add("default", "new");
        assert_eq!(component.len(), 1);
        let value = component.get("default").unwrap();
        assert_eq!(value.resolve().unwrap(), "new");
    }

    #[test]
    fn test_names_preserve_insertion_order() {
        let config = sample_config();
        assert_eq!(config.component_names(), vec!["button", "badge"]);
        assert_eq!(
            config.component("button").unwrap().variant_names(),
            vec!["default", "primary"]
        );
    }

    #[test]
    fn test_validate_flags_missing_default() {
        let issues = sample_config().validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0],
            ValidationIssue::MissingDefaultVariant {
                component: "badge".to_string()
            }
        );
    }

    #[test]
    fn test_validate_clean_config() {
        let config = VariantConfig::new().add(
            "card",
            ComponentConfig::new().add(
                "default",
                StyleGroup::new().add("default", "rounded-lg border"),
            ),
        );
        assert!(config.validate().is_empty());
    }
}
