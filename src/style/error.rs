//! Diagnostic types for configuration validation and lookup failures.
//!
//! Nothing in this module is ever raised out of the public API. Validation
//! issues are collected at construction time; resolution warnings travel on
//! the internal `Result` channel and end up in log records and in
//! [`Resolution`](crate::Resolution) values.

use serde::Serialize;
use thiserror::Error;

/// How serious a validation issue is.
///
/// `Error` issues mean a piece of configuration is unusable and the affected
/// lookups will fail over to the fallback table; `Warning` issues are purely
/// advisory. Neither aborts construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Returns the lowercase tag used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structural problem found while validating a configuration.
///
/// Issues are collected, logged, and retained on the resolver; construction
/// itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationIssue {
    /// The supplied value (or one of its component entries) is not a mapping.
    ///
    /// When the root configuration is affected, resolution proceeds against
    /// an effectively empty configuration; when a single component is
    /// affected, that component is dropped.
    #[error("{scope} is not a mapping (got {found})")]
    ConfigurationInvalid { scope: String, found: String },

    /// A component has no `default` variant. Advisory only.
    #[error("component `{component}` has no `default` variant")]
    MissingDefaultVariant { component: String },

    /// A variant entry is neither a string nor an object; the entry is
    /// dropped and lookups for it fail over to the fallback table.
    #[error("variant `{component}.{variant}` has unsupported type {found}; entry dropped")]
    InvalidVariantType {
        component: String,
        variant: String,
        found: String,
    },
}

impl ValidationIssue {
    /// The severity tag for this issue.
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::MissingDefaultVariant { .. } => Severity::Warning,
            ValidationIssue::ConfigurationInvalid { .. }
            | ValidationIssue::InvalidVariantType { .. } => Severity::Error,
        }
    }
}

/// Why a single style value failed to produce a class string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveFailure {
    /// A group was consulted for its `default` entry and had none.
    #[error("group has no usable `default` entry")]
    NoDefault,
    /// A group's `default` was itself a group; only one level of
    /// indirection is honored.
    #[error("`default` nesting exceeds one level of indirection")]
    TooDeep,
    /// A nested path tried to descend through a literal or computed value.
    #[error("value is not a group and cannot be descended into")]
    NotAGroup,
}

/// A non-fatal lookup failure, recorded before falling back.
///
/// These are the structured records behind the never-throws contract:
/// internal resolution returns `Result<String, ResolutionWarning>`, and the
/// public methods unwrap it into fallback-or-empty plus a log record.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ResolutionWarning {
    /// The requested component is not in the configuration.
    #[error("no component `{component}` in configuration")]
    UnknownComponent { component: String },

    /// The component exists but has no such variant (or a nested path ran
    /// off the tree at this key).
    #[error("component `{component}` has no variant `{variant}` (available: {})", .available.join(", "))]
    UnknownVariant {
        component: String,
        variant: String,
        available: Vec<String>,
    },

    /// The entry exists but did not resolve to a class string.
    #[error("variant `{component}.{variant}` did not resolve: {reason} (available: {})", .available.join(", "))]
    Unresolvable {
        component: String,
        variant: String,
        reason: ResolveFailure,
        available: Vec<String>,
    },

    /// The fallback table had no entry either; the lookup yields an empty
    /// string.
    #[error("no fallback registered for `{key}`; add_fallback(\"{key}\", ..) would provide one")]
    FallbackMissing { key: String },
}
