//! Collaborator seams for filter resolution.

use crate::schema::{BoolQuery, QueryLanguage};

use super::error::FilterError;

/// Borrowed inputs for a single bool-query build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryFilterParams<'a> {
    pub query: &'a str,
    pub language: QueryLanguage,
    pub filters: &'a [serde_json::Value],
    pub index: &'a [String],
    pub exception_filter: Option<&'a serde_json::Value>,
}

/// Turns query text, language and filters into a bool query.
///
/// Implementations are synchronous and must not keep state between
/// calls; the resolver calls them from many rule executions at once.
pub trait QueryFilterBuilder: Send + Sync {
    fn build(&self, params: QueryFilterParams<'_>) -> Result<BoolQuery, FilterError>;
}
