//! A ready-made configuration covering common components.
//!
//! The preset covers buttons (sized), cards, badges, inputs and alerts with
//! a coherent look. Use it directly through
//! [`QuickVariants::with_presets`](crate::QuickVariants::with_presets), or
//! start from [`default_config`] and override entries before building a
//! resolver.

use once_cell::sync::Lazy;

use crate::config::{ComponentConfig, VariantConfig};
use crate::style::StyleGroup;

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2";
const BADGE_BASE: &str = "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium";
const INPUT_BASE: &str = "block w-full rounded-lg px-3 py-2 text-sm border focus:outline-none focus:ring-2";
const ALERT_BASE: &str = "rounded-lg border p-4 text-sm";

/// A sized button variant: tone classes plus the shared base, with
/// `sm`/`md`/`lg` paddings and a `default` matching `md`.
fn button_variant(tone: &str) -> StyleGroup {
    StyleGroup::new()
        .add("default", format!("{BUTTON_BASE} {tone} px-4 py-2 text-sm"))
        .add("sm", format!("{BUTTON_BASE} {tone} px-3 py-1.5 text-xs"))
        .add("md", format!("{BUTTON_BASE} {tone} px-4 py-2 text-sm"))
        .add("lg", format!("{BUTTON_BASE} {tone} px-6 py-3 text-base"))
}

static DEFAULT_CONFIG: Lazy<VariantConfig> = Lazy::new(|| {
    VariantConfig::new()
        .add(
            "button",
            ComponentConfig::new()
                .add(
                    "default",
                    button_variant("bg-gray-100 text-gray-900 hover:bg-gray-200 focus:ring-gray-400"),
                )
                .add(
                    "primary",
                    button_variant("bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500"),
                )
                .add(
                    "secondary",
                    button_variant("bg-gray-600 text-white hover:bg-gray-700 focus:ring-gray-500"),
                )
                .add(
                    "outline",
                    button_variant("bg-transparent border border-gray-300 text-gray-700 hover:bg-gray-50 focus:ring-gray-400"),
                )
                .add(
                    "ghost",
                    button_variant("bg-transparent text-gray-700 hover:bg-gray-100 focus:ring-gray-400"),
                )
                .add(
                    "destructive",
                    button_variant("bg-red-600 text-white hover:bg-red-700 focus:ring-red-500"),
                ),
        )
        .add(
            "card",
            ComponentConfig::new()
                .add("default", "bg-white rounded-xl border border-gray-200 shadow-sm")
                .add("elevated", "bg-white rounded-xl shadow-lg")
                .add("outlined", "bg-transparent rounded-xl border-2 border-gray-300"),
        )
        .add(
            "badge",
            ComponentConfig::new()
                .add("default", format!("{BADGE_BASE} bg-gray-100 text-gray-800"))
                .add("primary", format!("{BADGE_BASE} bg-blue-100 text-blue-800"))
                .add("success", format!("{BADGE_BASE} bg-green-100 text-green-800"))
                .add("warning", format!("{BADGE_BASE} bg-amber-100 text-amber-800"))
                .add("danger", format!("{BADGE_BASE} bg-red-100 text-red-800")),
        )
        .add(
            "input",
            ComponentConfig::new()
                .add(
                    "default",
                    format!("{INPUT_BASE} border-gray-300 focus:ring-blue-500 focus:border-blue-500"),
                )
                .add(
                    "error",
                    format!("{INPUT_BASE} border-red-300 text-red-900 focus:ring-red-500 focus:border-red-500"),
                )
                .add(
                    "success",
                    format!("{INPUT_BASE} border-green-300 focus:ring-green-500 focus:border-green-500"),
                ),
        )
        .add(
            "alert",
            ComponentConfig::new()
                .add("default", format!("{ALERT_BASE} bg-gray-50 border-gray-200 text-gray-800"))
                .add("info", format!("{ALERT_BASE} bg-blue-50 border-blue-200 text-blue-800"))
                .add("success", format!("{ALERT_BASE} bg-green-50 border-green-200 text-green-800"))
                .add("warning", format!("{ALERT_BASE} bg-amber-50 border-amber-200 text-amber-800"))
                .add("error", format!("{ALERT_BASE} bg-red-50 border-red-200 text-red-800")),
        )
});

/// Returns a copy of the preset configuration.
pub fn default_config() -> VariantConfig {
    DEFAULT_CONFIG.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VariantResolver;

    #[test]
    fn test_covers_expected_components() {
        let config = default_config();
        assert_eq!(
            config.component_names(),
            vec!["button", "card", "badge", "input", "alert"]
        );
    }

    #[test]
    fn test_every_component_has_default() {
        assert!(default_config().validate().is_empty());
    }

    #[test]
    fn test_button_tones_complete() {
        let config = default_config();
        assert_eq!(
            config.component("button").unwrap().variant_names(),
            vec!["default", "primary", "secondary", "outline", "ghost", "destructive"]
        );

        let resolver = VariantResolver::new(config);
        for tone in ["default", "primary", "secondary", "outline", "ghost", "destructive"] {
            let classes = resolver.variant("button", tone);
            assert!(!classes.is_empty(), "button tone `{tone}` resolved empty");
            assert!(classes.contains("inline-flex"));
        }
        assert!(resolver.variant("button", "outline").contains("border-gray-300"));
        assert!(resolver.variant("button", "destructive").contains("bg-red-600"));
    }

    #[test]
    fn test_buttons_are_sized() {
        let resolver = VariantResolver::new(default_config());
        let primary = resolver.variant("button", "primary");
        assert!(primary.contains("bg-blue-600"));
        assert!(primary.contains("px-4 py-2"));

        let large = resolver.sized("button", "primary", "lg");
        assert!(large.contains("px-6 py-3"));
        assert!(large.contains("bg-blue-600"));
    }

    #[test]
    fn test_alert_tones_share_base() {
        let resolver = VariantResolver::new(default_config());
        let info = resolver.variant("alert", "info");
        let error = resolver.variant("alert", "error");
        assert!(info.contains("rounded-lg border p-4"));
        assert!(error.contains("rounded-lg border p-4"));
        assert!(info.contains("blue"));
        assert!(error.contains("red"));
    }
}
