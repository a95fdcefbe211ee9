//! Style values and the diagnostics attached to them.
//!
//! This module provides:
//! - [`StyleValue`]: a class string, a computed class string, or a named
//!   group of further values
//! - [`StyleGroup`]: the ordered map behind group values, with a fluent
//!   builder
//! - [`ComputedStyle`]: a shareable closure producing a class string on
//!   demand
//! - [`ValidationIssue`] / [`Severity`]: construction-time diagnostics
//! - [`ResolutionWarning`] / [`ResolveFailure`]: lookup-time diagnostics
//!
//! Values are resolved to plain `String` class lists by the resolver; a
//! group stands in for its `default` entry when used where a single class
//! string is expected, with exactly one level of that indirection honored.

mod error;
mod value;

pub use error::{ResolutionWarning, ResolveFailure, Severity, ValidationIssue};
pub use value::{ComputedStyle, StyleGroup, StyleValue, DEFAULT_VARIANT};
