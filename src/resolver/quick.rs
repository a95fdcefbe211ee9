//! Shorthand facade for common components.

use serde_json::Value;

use crate::config::VariantConfig;
use crate::presets;

use super::resolver::VariantResolver;

/// A resolver facade with per-component helpers and a built-in preset.
///
/// `QuickVariants` wraps a [`VariantResolver`] and adds shorthand methods
/// for the components the preset configuration covers. It is the
/// zero-ceremony entry point: [`with_presets`](Self::with_presets) needs no
/// configuration at all.
///
/// # Example
///
/// ```
/// use attire::QuickVariants;
///
/// let quick = QuickVariants::with_presets();
/// assert!(quick.button("primary", None).contains("bg-blue-600"));
/// assert!(quick.button("primary", Some("lg")).contains("px-6"));
/// assert!(quick.alert("error").contains("bg-red-50"));
/// ```
#[derive(Debug, Clone)]
pub struct QuickVariants {
    resolver: VariantResolver,
}

impl QuickVariants {
    /// Wraps a resolver over `config`.
    pub fn new(config: VariantConfig) -> Self {
        Self {
            resolver: VariantResolver::new(config),
        }
    }

    /// Uses the preset configuration from [`crate::presets`].
    pub fn with_presets() -> Self {
        Self::new(presets::default_config())
    }

    /// Builds from parsed JSON; malformed entries are dropped and reported
    /// on [`resolver().issues()`](VariantResolver::issues).
    pub fn from_json(value: &Value) -> Self {
        Self {
            resolver: VariantResolver::from_json(value),
        }
    }

    /// Button classes, optionally for a specific size.
    pub fn button(&self, variant: &str, size: Option<&str>) -> String {
        match size {
            Some(size) => self.resolver.sized("button", variant, size),
            None => self.resolver.variant("button", variant),
        }
    }

    /// Card classes.
    pub fn card(&self, variant: &str) -> String {
        self.resolver.variant("card", variant)
    }

    /// Badge classes.
    pub fn badge(&self, variant: &str) -> String {
        self.resolver.variant("badge", variant)
    }

    /// Input classes.
    pub fn input(&self, variant: &str) -> String {
        self.resolver.variant("input", variant)
    }

    /// Alert classes.
    pub fn alert(&self, variant: &str) -> String {
        self.resolver.variant("alert", variant)
    }

    /// See [`VariantResolver::get`].
    pub fn get(&self, key: &str) -> String {
        self.resolver.get(key)
    }

    /// See [`VariantResolver::nested`].
    pub fn nested(&self, path: &str) -> String {
        self.resolver.nested(path)
    }

    /// See [`VariantResolver::when`].
    pub fn when(
        &self,
        condition: bool,
        component: &str,
        variant: &str,
        otherwise: Option<(&str, &str)>,
    ) -> String {
        self.resolver.when(condition, component, variant, otherwise)
    }

    /// See [`VariantResolver::combine`].
    pub fn combine<S: AsRef<str>>(&self, entries: &[S]) -> String {
        self.resolver.combine(entries)
    }

    /// See [`VariantResolver::add_fallback`].
    pub fn add_fallback(&mut self, key: impl Into<String>, classes: impl Into<String>) -> String {
        self.resolver.add_fallback(key, classes)
    }

    /// The wrapped resolver, for the full lookup surface.
    pub fn resolver(&self) -> &VariantResolver {
        &self.resolver
    }
}

impl Default for QuickVariants {
    /// Same as [`QuickVariants::with_presets`].
    fn default() -> Self {
        Self::with_presets()
    }
}
