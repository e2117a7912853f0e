//! Search filter resolution for detection rules.
//!
//! This crate provides:
//! - Rule-side schema types (rule type, filter request, saved query record)
//! - The filter resolver with saved-query fallback
//! - A default bool-query builder
//! - Saved-object stores (in-memory and OpenSearch)

pub mod filter;
pub mod schema;
pub mod store;

pub use filter::{resolve_filter, FilterError, FilterResolver};
