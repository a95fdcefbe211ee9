//! Design tokens and variant-to-class resolution for UI components.
//!
//! `attire` maps `component.variant` pairs to utility class strings. A
//! [`VariantResolver`] owns a nested [`VariantConfig`] and a
//! [`FallbackTable`]; every lookup is total, answering a miss from the
//! fallback table or with an empty string, never with an error. Problems
//! surface as collected diagnostics and log records instead.
//!
//! # Quick start
//!
//! ```
//! use attire::QuickVariants;
//!
//! let ui = QuickVariants::with_presets();
//! let button = ui.button("primary", Some("lg"));
//! assert!(button.contains("bg-blue-600"));
//! assert!(ui.alert("error").contains("bg-red-50"));
//! ```
//!
//! # Configuring
//!
//! ```
//! use attire::{ComponentConfig, VariantConfig, VariantResolver};
//!
//! let resolver = VariantResolver::new(VariantConfig::new().add(
//!     "button",
//!     ComponentConfig::new()
//!         .add("default", "rounded-lg font-medium")
//!         .add("primary", "bg-blue-600 text-white"),
//! ));
//!
//! assert_eq!(resolver.get("button.primary"), "bg-blue-600 text-white");
//! assert_eq!(resolver.get("button"), "rounded-lg font-medium");
//! assert_eq!(resolver.variant("button", "missing"), "");
//! ```
//!
//! Configurations also load from JSON through
//! [`VariantResolver::from_json`]; malformed entries are dropped and
//! reported as [`ValidationIssue`]s on [`VariantResolver::issues`].
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade: construction issues under the
//! `attire::config` target, lookup misses under `attire::resolver`. Wire up
//! any logger implementation to see them.

pub mod config;
pub mod presets;
pub mod resolver;
pub mod style;
pub mod tokens;

pub use config::{ComponentConfig, VariantConfig};
pub use resolver::{
    FallbackTable, QuickVariants, Resolution, ResolvedFrom, VariantResolver, BUILTIN_FALLBACKS,
};
pub use style::{
    ComputedStyle, ResolutionWarning, ResolveFailure, Severity, StyleGroup, StyleValue,
    ValidationIssue, DEFAULT_VARIANT,
};
