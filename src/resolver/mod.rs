//! Variant resolution with fallbacks.
//!
//! This module provides:
//!
//! - [`VariantResolver`]: total lookups over a [`VariantConfig`](crate::VariantConfig)
//! - [`FallbackTable`]: keyed last-resort class strings, seeded with
//!   [`BUILTIN_FALLBACKS`]
//! - [`Resolution`] / [`ResolvedFrom`]: the full outcome of a lookup, for
//!   callers that want strictness on top of the never-fails surface
//! - [`QuickVariants`]: a facade with per-component helpers and a preset
//!   configuration
//!
//! Lookups are logged under the `attire::resolver` target; construction
//! diagnostics go to `attire::config`.

mod fallback;
mod quick;
#[allow(clippy::module_inception)]
mod resolver;

pub use fallback::{FallbackTable, BUILTIN_FALLBACKS};
pub use quick::QuickVariants;
pub use resolver::{Resolution, ResolvedFrom, VariantResolver};
