//! Variant configuration: typed model plus tolerant JSON ingestion.
//!
//! A [`VariantConfig`] maps component names to [`ComponentConfig`]s, which
//! map variant names to style values. Configurations are built fluently in
//! code or loaded from JSON with [`VariantConfig::from_json`]; both paths
//! surface problems as [`ValidationIssue`](crate::ValidationIssue)s rather
//! than errors.

mod json;
mod model;

pub use model::{ComponentConfig, VariantConfig};
