//! The variant resolver: total lookups over a configuration plus fallbacks.
//!
//! Every public lookup returns a plain `String` and never fails. Misses are
//! logged under the `attire::resolver` target and answered from the
//! [`FallbackTable`], or with an empty string as the last resort.

use serde::Serialize;
use serde_json::Value;

use crate::config::VariantConfig;
use crate::style::{
    ResolutionWarning, ResolveFailure, Severity, StyleValue, ValidationIssue, DEFAULT_VARIANT,
};

use super::fallback::FallbackTable;

/// Where a lookup's classes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedFrom {
    /// The configuration itself.
    Configuration,
    /// The fallback table.
    Fallback,
    /// Nowhere; the classes are empty.
    Empty,
}

/// The full outcome of a single lookup.
///
/// [`VariantResolver::resolve`] returns this instead of a bare string for
/// callers that want to know whether a lookup was served from configuration,
/// and which warnings were recorded on the way. The string-returning methods
/// are thin wrappers over it.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    classes: String,
    source: ResolvedFrom,
    warnings: Vec<ResolutionWarning>,
}

impl Resolution {
    fn from_config(classes: String) -> Self {
        Self {
            classes,
            source: ResolvedFrom::Configuration,
            warnings: Vec::new(),
        }
    }

    /// The resolved class string, possibly empty.
    pub fn classes(&self) -> &str {
        &self.classes
    }

    /// Where the classes came from.
    pub fn source(&self) -> ResolvedFrom {
        self.source
    }

    /// Warnings recorded while resolving, in the order they occurred.
    pub fn warnings(&self) -> &[ResolutionWarning] {
        &self.warnings
    }

    /// True when the classes came straight from the configuration.
    pub fn is_exact(&self) -> bool {
        self.source == ResolvedFrom::Configuration
    }

    /// Consumes the resolution, keeping only the classes.
    pub fn into_classes(self) -> String {
        self.classes
    }
}

/// Splits a dotted key at the first dot; bare names address the default
/// variant.
fn split_path(key: &str) -> (&str, &str) {
    match key.split_once('.') {
        Some((component, rest)) => (component, rest),
        None => (key, DEFAULT_VARIANT),
    }
}

/// Any dotted entry is a lookup path; everything else is literal classes.
fn looks_like_path(entry: &str) -> bool {
    entry.contains('.')
}

/// Resolves component variants to class strings.
///
/// A resolver owns a [`VariantConfig`], a [`FallbackTable`] and the
/// validation issues found at construction time. All lookup methods take
/// `&self` and are total: a miss is logged, answered from the fallback
/// table when possible, and otherwise yields an empty string. Only
/// [`add_fallback`](Self::add_fallback) mutates the resolver.
///
/// # Example
///
/// ```
/// use attire::{ComponentConfig, VariantConfig, VariantResolver};
///
/// let resolver = VariantResolver::new(VariantConfig::new().add(
///     "button",
///     ComponentConfig::new()
///         .add("default", "rounded font-medium")
///         .add("primary", "bg-blue-600 text-white"),
/// ));
///
/// assert_eq!(resolver.variant("button", "primary"), "bg-blue-600 text-white");
/// assert_eq!(resolver.get("button"), "rounded font-medium");
/// // No button.default fallback exists, so unknown variants come back empty.
/// assert_eq!(resolver.variant("button", "ghost"), "");
/// ```
#[derive(Debug, Clone)]
pub struct VariantResolver {
    config: VariantConfig,
    fallbacks: FallbackTable,
    issues: Vec<ValidationIssue>,
}

impl VariantResolver {
    /// Creates a resolver over `config` with the builtin fallback entries.
    pub fn new(config: VariantConfig) -> Self {
        Self::build(config, FallbackTable::new(), Vec::new())
    }

    /// Creates a resolver with caller-supplied fallback entries layered over
    /// the builtins. On key collisions the caller's entry wins.
    pub fn with_fallbacks(config: VariantConfig, fallbacks: FallbackTable) -> Self {
        let mut table = FallbackTable::new();
        for (key, classes) in fallbacks.iter() {
            table.insert(key, classes);
        }
        Self::build(config, table, Vec::new())
    }

    /// Creates a resolver from parsed JSON.
    ///
    /// Malformed entries are dropped and reported through
    /// [`issues`](Self::issues); construction itself never fails.
    pub fn from_json(value: &Value) -> Self {
        let (config, issues) = VariantConfig::from_json(value);
        Self::build(config, FallbackTable::new(), issues)
    }

    fn build(
        config: VariantConfig,
        fallbacks: FallbackTable,
        mut issues: Vec<ValidationIssue>,
    ) -> Self {
        issues.extend(config.validate());
        for issue in &issues {
            match issue.severity() {
                Severity::Error => log::warn!(target: "attire::config", "{issue}"),
                Severity::Warning => log::debug!(target: "attire::config", "{issue}"),
            }
        }
        Self {
            config,
            fallbacks,
            issues,
        }
    }

    /// The validation issues found when this resolver was built.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// The configuration being resolved against.
    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// The fallback table, builtins and later additions included.
    pub fn fallbacks(&self) -> &FallbackTable {
        &self.fallbacks
    }

    /// Looks up `component.variant` and returns the class string.
    ///
    /// The two-argument form of [`get`](Self::get); both names are taken
    /// literally. Never fails: misses fall back, and an unmatched fallback
    /// yields `""`.
    pub fn variant(&self, component: &str, variant: &str) -> String {
        self.resolve(component, variant).into_classes()
    }

    /// Looks up a dotted key.
    ///
    /// The key is split at the first dot into component and variant; a bare
    /// component name addresses its `default` variant. The remainder is
    /// taken literally, so `get("button.outline.dark")` looks for a variant
    /// named `outline.dark` (see [`nested`](Self::nested) for path walking).
    ///
    /// # Example
    ///
    /// ```
    /// use attire::{ComponentConfig, VariantConfig, VariantResolver};
    ///
    /// let resolver = VariantResolver::new(VariantConfig::new().add(
    ///     "badge",
    ///     ComponentConfig::new().add("default", "rounded-full text-xs"),
    /// ));
    ///
    /// assert_eq!(resolver.get("badge"), "rounded-full text-xs");
    /// assert_eq!(resolver.get("badge.default"), "rounded-full text-xs");
    /// ```
    pub fn get(&self, key: &str) -> String {
        let (component, variant) = split_path(key);
        self.variant(component, variant)
    }

    /// Looks up `component.variant` and reports the full outcome.
    ///
    /// This is the opt-in strict surface: the same resolution as
    /// [`variant`](Self::variant), but with the source and any warnings
    /// attached so callers can treat fallbacks as failures if they want to.
    pub fn resolve(&self, component: &str, variant: &str) -> Resolution {
        let outcome = self.try_variant(component, variant);
        self.resolve_with_fallback(component, variant, outcome)
    }

    /// Looks up size-specific classes, falling back to the base variant.
    ///
    /// When the variant's value is a group containing `size`, that entry is
    /// resolved. A plain string variant ignores the size, and an unknown
    /// size uses the base variant classes.
    ///
    /// # Example
    ///
    /// ```
    /// use attire::{ComponentConfig, StyleGroup, VariantConfig, VariantResolver};
    ///
    /// let resolver = VariantResolver::new(VariantConfig::new().add(
    ///     "button",
    ///     ComponentConfig::new().add(
    ///         "default",
    ///         StyleGroup::new()
    ///             .add("default", "px-4 py-2 text-sm")
    ///             .add("lg", "px-6 py-3 text-base"),
    ///     ),
    /// ));
    ///
    /// assert_eq!(resolver.sized("button", "default", "lg"), "px-6 py-3 text-base");
    /// assert_eq!(resolver.sized("button", "default", "xl"), "px-4 py-2 text-sm");
    /// ```
    pub fn sized(&self, component: &str, variant: &str, size: &str) -> String {
        if let Some(entry) = self.config.component(component) {
            if let Some(StyleValue::Group(group)) = entry.get(variant) {
                if let Some(value) = group.get(size) {
                    match value.resolve() {
                        Ok(classes) => return classes,
                        Err(reason) => {
                            let warning = ResolutionWarning::Unresolvable {
                                component: component.to_string(),
                                variant: format!("{variant}.{size}"),
                                reason,
                                available: group.keys().map(|key| key.to_string()).collect(),
                            };
                            self.log_warning(&warning);
                        }
                    }
                } else {
                    log::debug!(
                        target: "attire::resolver",
                        "`{component}.{variant}` has no size `{size}`; using base variant"
                    );
                }
            }
        }
        self.variant(component, variant)
    }

    /// Walks a dotted path through nested groups.
    ///
    /// The first segment names the component, the second a variant, and any
    /// further segments descend through group values. A bare component name
    /// addresses its `default` variant. Misses fall back under the full
    /// dotted key, then under `component.default`.
    ///
    /// # Example
    ///
    /// ```
    /// use attire::VariantResolver;
    /// use serde_json::json;
    ///
    /// let resolver = VariantResolver::from_json(&json!({
    ///     "button": {
    ///         "default": "rounded",
    ///         "sizes": { "default": "px-4", "sm": "px-3 text-xs" }
    ///     }
    /// }));
    ///
    /// assert_eq!(resolver.nested("button.sizes.sm"), "px-3 text-xs");
    /// assert_eq!(resolver.nested("button.sizes"), "px-4");
    /// assert_eq!(resolver.nested("button"), "rounded");
    /// ```
    pub fn nested(&self, path: &str) -> String {
        let (component, rest) = split_path(path);
        let outcome = self.try_nested(component, rest);
        self.resolve_with_fallback(component, rest, outcome)
            .into_classes()
    }

    /// Returns `component.variant`'s classes when `condition` holds,
    /// otherwise the `otherwise` pair's classes, otherwise an empty string.
    pub fn when(
        &self,
        condition: bool,
        component: &str,
        variant: &str,
        otherwise: Option<(&str, &str)>,
    ) -> String {
        if condition {
            self.variant(component, variant)
        } else {
            match otherwise {
                Some((other_component, other_variant)) => {
                    self.variant(other_component, other_variant)
                }
                None => String::new(),
            }
        }
    }

    /// Joins lookups and literal classes into one class string.
    ///
    /// Every entry containing a dot is resolved as a [`nested`](Self::nested)
    /// path; dot-free entries pass through as literal classes. Entries that
    /// resolve to nothing are skipped. Note the heuristic reads a dotted
    /// literal class like `w-[2.5rem]` as a path; registering the class
    /// under itself with [`add_fallback`](Self::add_fallback) makes it pass
    /// through.
    ///
    /// # Example
    ///
    /// ```
    /// use attire::{ComponentConfig, VariantConfig, VariantResolver};
    ///
    /// let resolver = VariantResolver::new(VariantConfig::new().add(
    ///     "button",
    ///     ComponentConfig::new().add("primary", "bg-blue-600 text-white"),
    /// ));
    ///
    /// assert_eq!(
    ///     resolver.combine(&["button.primary", "w-full", "shadow-md"]),
    ///     "bg-blue-600 text-white w-full shadow-md"
    /// );
    /// ```
    pub fn combine<S: AsRef<str>>(&self, entries: &[S]) -> String {
        let mut classes = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            if entry.is_empty() {
                continue;
            }
            let resolved = if looks_like_path(entry) {
                self.nested(entry)
            } else {
                entry.to_string()
            };
            if !resolved.is_empty() {
                classes.push(resolved);
            }
        }
        classes.join(" ")
    }

    /// Returns true if the configuration defines a usable value for
    /// `component.variant`.
    ///
    /// An empty literal counts as unusable. Fallback entries are not
    /// consulted.
    pub fn has(&self, component: &str, variant: &str) -> bool {
        self.config
            .component(component)
            .and_then(|entry| entry.get(variant))
            .is_some_and(StyleValue::is_truthy)
    }

    /// Registers a fallback entry and returns its classes.
    ///
    /// The entry answers future misses for the exact key, and for every
    /// variant of the component when the key is `component.default`.
    pub fn add_fallback(&mut self, key: impl Into<String>, classes: impl Into<String>) -> String {
        let key = key.into();
        let classes = classes.into();
        log::debug!(target: "attire::resolver", "registered fallback `{key}`");
        self.fallbacks.insert(key, classes.clone());
        classes
    }

    fn try_variant(&self, component: &str, variant: &str) -> Result<String, ResolutionWarning> {
        let Some(entry) = self.config.component(component) else {
            return Err(ResolutionWarning::UnknownComponent {
                component: component.to_string(),
            });
        };
        let Some(value) = entry.get(variant) else {
            return Err(ResolutionWarning::UnknownVariant {
                component: component.to_string(),
                variant: variant.to_string(),
                available: owned(entry.variant_names()),
            });
        };
        value
            .resolve()
            .map_err(|reason| ResolutionWarning::Unresolvable {
                component: component.to_string(),
                variant: variant.to_string(),
                reason,
                available: owned(entry.variant_names()),
            })
    }

    fn try_nested(&self, component: &str, rest: &str) -> Result<String, ResolutionWarning> {
        let Some(entry) = self.config.component(component) else {
            return Err(ResolutionWarning::UnknownComponent {
                component: component.to_string(),
            });
        };

        let mut segments = rest.split('.');
        let first = segments.next().unwrap_or_default();
        let Some(mut value) = entry.get(first) else {
            return Err(ResolutionWarning::UnknownVariant {
                component: component.to_string(),
                variant: first.to_string(),
                available: owned(entry.variant_names()),
            });
        };

        let mut walked = first.to_string();
        for segment in segments {
            match value {
                StyleValue::Group(group) => match group.get(segment) {
                    Some(next) => {
                        walked.push('.');
                        walked.push_str(segment);
                        value = next;
                    }
                    None => {
                        return Err(ResolutionWarning::UnknownVariant {
                            component: component.to_string(),
                            variant: format!("{walked}.{segment}"),
                            available: group.keys().map(|key| key.to_string()).collect(),
                        });
                    }
                },
                _ => {
                    return Err(ResolutionWarning::Unresolvable {
                        component: component.to_string(),
                        variant: walked,
                        reason: ResolveFailure::NotAGroup,
                        available: owned(entry.variant_names()),
                    });
                }
            }
        }

        value
            .resolve()
            .map_err(|reason| ResolutionWarning::Unresolvable {
                component: component.to_string(),
                variant: walked,
                reason,
                available: owned(entry.variant_names()),
            })
    }

    fn resolve_with_fallback(
        &self,
        component: &str,
        variant: &str,
        outcome: Result<String, ResolutionWarning>,
    ) -> Resolution {
        let warning = match outcome {
            Ok(classes) => return Resolution::from_config(classes),
            Err(warning) => warning,
        };
        self.log_warning(&warning);
        let mut warnings = vec![warning];
        match self.fallbacks.resolve(component, variant) {
            Ok(classes) => Resolution {
                classes: classes.to_string(),
                source: ResolvedFrom::Fallback,
                warnings,
            },
            Err(missing) => {
                self.log_warning(&missing);
                warnings.push(missing);
                Resolution {
                    classes: String::new(),
                    source: ResolvedFrom::Empty,
                    warnings,
                }
            }
        }
    }

    fn log_warning(&self, warning: &ResolutionWarning) {
        match warning {
            ResolutionWarning::UnknownComponent { .. }
            | ResolutionWarning::UnknownVariant { .. } => {
                log::debug!(target: "attire::resolver", "{warning}");
            }
            ResolutionWarning::Unresolvable { .. } | ResolutionWarning::FallbackMissing { .. } => {
                log::warn!(target: "attire::resolver", "{warning}");
            }
        }
    }
}

impl Default for VariantResolver {
    /// An empty configuration with the builtin fallbacks.
    fn default() -> Self {
        Self::new(VariantConfig::new())
    }
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(|name| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComponentConfig;
    use crate::style::StyleGroup;
    use serde_json::json;

    fn sample_resolver() -> VariantResolver {
        VariantResolver::new(
            VariantConfig::new()
                .add(
                    "button",
                    ComponentConfig::new()
                        .add("default", "rounded font-medium")
                        .add("primary", "bg-blue-600 text-white")
                        .add("outline.dark", "border border-gray-700 text-gray-100")
                        .add(
                            "sizes",
                            StyleGroup::new()
                                .add("default", "px-4 py-2 text-sm")
                                .add("sm", "px-3 py-1.5 text-xs")
                                .add("lg", "px-6 py-3 text-base"),
                        ),
                )
                .add("badge", ComponentConfig::new().add("default", "rounded-full text-xs")),
        )
    }

    #[test]
    fn test_variant_from_configuration() {
        let resolver = sample_resolver();
        assert_eq!(resolver.variant("button", "primary"), "bg-blue-600 text-white");
        assert_eq!(resolver.variant("badge", "default"), "rounded-full text-xs");
    }

    #[test]
    fn test_unknown_component_uses_fallback() {
        let resolver = sample_resolver();
        // No alert component configured; the builtin alert.default answers.
        let classes = resolver.variant("alert", "warning");
        assert!(classes.contains("bg-gray-50"));
    }

    #[test]
    fn test_unknown_variant_without_fallback_is_empty() {
        let resolver = sample_resolver();
        assert_eq!(resolver.variant("button", "ghost"), "");
    }

    #[test]
    fn test_configuration_overrides_fallback() {
        let resolver = VariantResolver::new(VariantConfig::new().add(
            "button",
            ComponentConfig::new().add("primary", "bg-rose-600 text-white"),
        ));
        assert_eq!(resolver.variant("button", "primary"), "bg-rose-600 text-white");
    }

    #[test]
    fn test_get_splits_at_first_dot() {
        let resolver = sample_resolver();
        assert_eq!(resolver.get("button.primary"), "bg-blue-600 text-white");
        assert_eq!(resolver.get("button"), "rounded font-medium");
        // Everything after the first dot is one literal variant name.
        assert_eq!(
            resolver.get("button.outline.dark"),
            "border border-gray-700 text-gray-100"
        );
    }

    #[test]
    fn test_group_variant_resolves_to_its_default() {
        let resolver = sample_resolver();
        assert_eq!(resolver.variant("button", "sizes"), "px-4 py-2 text-sm");
    }

    #[test]
    fn test_group_without_default_falls_back() {
        let resolver = VariantResolver::new(VariantConfig::new().add(
            "alert",
            ComponentConfig::new().add("banner", StyleGroup::new().add("top", "sticky top-0")),
        ));
        let resolution = resolver.resolve("alert", "banner");
        assert_eq!(resolution.source(), ResolvedFrom::Fallback);
        assert!(resolution.classes().contains("bg-gray-50"));
        assert!(matches!(
            resolution.warnings()[0],
            ResolutionWarning::Unresolvable {
                reason: ResolveFailure::NoDefault,
                ..
            }
        ));
    }

    #[test]
    fn test_sized_picks_size_entry() {
        let resolver = sample_resolver();
        assert_eq!(resolver.sized("button", "sizes", "sm"), "px-3 py-1.5 text-xs");
        assert_eq!(resolver.sized("button", "sizes", "lg"), "px-6 py-3 text-base");
    }

    #[test]
    fn test_sized_unknown_size_uses_base_variant() {
        let resolver = sample_resolver();
        assert_eq!(resolver.sized("button", "sizes", "xl"), "px-4 py-2 text-sm");
    }

    #[test]
    fn test_sized_ignores_size_on_plain_variant() {
        let resolver = sample_resolver();
        assert_eq!(resolver.sized("button", "primary", "lg"), "bg-blue-600 text-white");
    }

    #[test]
    fn test_nested_walks_groups() {
        let resolver = sample_resolver();
        assert_eq!(resolver.nested("button.sizes.sm"), "px-3 py-1.5 text-xs");
        assert_eq!(resolver.nested("button.sizes"), "px-4 py-2 text-sm");
        assert_eq!(resolver.nested("button"), "rounded font-medium");
    }

    #[test]
    fn test_nested_through_literal_falls_back() {
        let resolver = sample_resolver();
        // badge.default is a literal; descending into it cannot work, and
        // the builtin badge.default fallback answers instead.
        let classes = resolver.nested("badge.default.deep");
        assert!(classes.contains("rounded-full"));
    }

    #[test]
    fn test_nested_miss_uses_full_path_fallback() {
        let mut resolver = sample_resolver();
        resolver.add_fallback("button.sizes.xs", "px-2 py-1 text-xs");
        assert_eq!(resolver.nested("button.sizes.xs"), "px-2 py-1 text-xs");
    }

    #[test]
    fn test_when_picks_branch() {
        let resolver = sample_resolver();
        assert_eq!(
            resolver.when(true, "button", "primary", None),
            "bg-blue-600 text-white"
        );
        assert_eq!(
            resolver.when(false, "button", "primary", Some(("button", "default"))),
            "rounded font-medium"
        );
        assert_eq!(resolver.when(false, "button", "primary", None), "");
    }

    #[test]
    fn test_combine_mixes_paths_and_literals() {
        let resolver = sample_resolver();
        assert_eq!(
            resolver.combine(&["button.primary", "w-full", "shadow-md"]),
            "bg-blue-600 text-white w-full shadow-md"
        );
        // Dotted entries take the nested walk, so deep paths work too.
        assert_eq!(
            resolver.combine(&["button.sizes.sm", "w-full"]),
            "px-3 py-1.5 text-xs w-full"
        );
    }

    #[test]
    fn test_combine_skips_empty_results() {
        let resolver = sample_resolver();
        assert_eq!(
            resolver.combine(&["button.ghost", "", "w-full"]),
            "w-full"
        );
    }

    #[test]
    fn test_combine_reads_dotted_classes_as_paths() {
        let mut resolver = sample_resolver();
        // The dot heuristic misreads arbitrary-value classes as paths.
        assert_eq!(resolver.combine(&["w-[2.5rem]"]), "");
        // Registering the class under itself makes it pass through: the
        // fallback lookup reassembles the full dotted key.
        resolver.add_fallback("w-[2.5rem]", "w-[2.5rem]");
        assert_eq!(
            resolver.combine(&["w-[2.5rem]", "shrink-0"]),
            "w-[2.5rem] shrink-0"
        );
    }

    #[test]
    fn test_has_requires_usable_value() {
        let resolver = VariantResolver::new(VariantConfig::new().add(
            "button",
            ComponentConfig::new()
                .add("primary", "bg-blue-600")
                .add("blank", ""),
        ));
        assert!(resolver.has("button", "primary"));
        assert!(!resolver.has("button", "blank"));
        assert!(!resolver.has("button", "ghost"));
        // Fallback entries do not count as configuration.
        assert!(!resolver.has("alert", "default"));
    }

    #[test]
    fn test_add_fallback_returns_and_registers() {
        let mut resolver = VariantResolver::default();
        let returned = resolver.add_fallback("toast.default", "shadow-lg p-4");
        assert_eq!(returned, "shadow-lg p-4");
        assert_eq!(resolver.variant("toast", "fancy"), "shadow-lg p-4");
        assert!(resolver.fallbacks().contains("toast.default"));
    }

    #[test]
    fn test_with_fallbacks_layers_caller_over_builtins() {
        let table = FallbackTable::empty()
            .add("button.primary", "bg-indigo-600 text-white")
            .add("toast.default", "shadow-lg p-4");
        let resolver = VariantResolver::with_fallbacks(VariantConfig::new(), table);

        // Caller entry wins over the builtin.
        assert_eq!(resolver.variant("button", "primary"), "bg-indigo-600 text-white");
        // Builtins not mentioned by the caller survive.
        assert!(resolver.variant("badge", "default").contains("rounded-full"));
        assert_eq!(resolver.variant("toast", "default"), "shadow-lg p-4");
    }

    #[test]
    fn test_computed_values_resolve_on_lookup() {
        let resolver = VariantResolver::new(VariantConfig::new().add(
            "card",
            ComponentConfig::new().add("default", StyleValue::computed(|| "p-6 rounded-xl".to_string())),
        ));
        assert_eq!(resolver.variant("card", "default"), "p-6 rounded-xl");
    }

    #[test]
    fn test_resolve_reports_source_and_warnings() {
        let resolver = sample_resolver();

        let hit = resolver.resolve("button", "primary");
        assert!(hit.is_exact());
        assert!(hit.warnings().is_empty());

        let fallback = resolver.resolve("input", "default");
        assert_eq!(fallback.source(), ResolvedFrom::Fallback);
        assert_eq!(fallback.warnings().len(), 1);

        let empty = resolver.resolve("button", "ghost");
        assert_eq!(empty.source(), ResolvedFrom::Empty);
        assert_eq!(empty.classes(), "");
        assert_eq!(empty.warnings().len(), 2);
    }

    #[test]
    fn test_issues_collected_at_build() {
        let resolver = VariantResolver::from_json(&json!({
            "button": { "primary": "bg-blue-600", "count": 4 }
        }));
        // One dropped entry, one missing default.
        assert_eq!(resolver.issues().len(), 2);
        assert_eq!(resolver.variant("button", "primary"), "bg-blue-600");
    }

    #[test]
    fn test_invalid_root_resolves_like_empty_config() {
        let resolver = VariantResolver::from_json(&json!("not a config"));
        assert_eq!(resolver.issues().len(), 1);
        assert!(resolver.variant("button", "primary").contains("bg-blue-600"));
        assert_eq!(resolver.variant("button", "ghost"), "");
    }
}
