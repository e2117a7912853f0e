//! Per-execution input to filter resolution.

use serde::{Deserialize, Serialize};

use super::{QueryLanguage, RuleType};

/// Everything a rule execution knows about the search it wants to run.
///
/// Filters and the exception filter are opaque JSON; only the query
/// builder looks inside them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuleFilterRequest {
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    #[serde(default)]
    pub filters: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub language: Option<QueryLanguage>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub saved_id: Option<String>,
    #[serde(default)]
    pub index: Option<Vec<String>>,
    #[serde(default)]
    pub exception_filter: Option<serde_json::Value>,
}

impl RuleFilterRequest {
    /// A request of the given type with every optional field unset.
    pub fn new(rule_type: RuleType) -> Self {
        Self {
            rule_type,
            filters: None,
            language: None,
            query: None,
            saved_id: None,
            index: None,
            exception_filter: None,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>, language: QueryLanguage) -> Self {
        self.query = Some(query.into());
        self.language = Some(language);
        self
    }

    pub fn with_index<I, S>(mut self, index: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index = Some(index.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_filters(mut self, filters: Vec<serde_json::Value>) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_saved_id(mut self, saved_id: impl Into<String>) -> Self {
        self.saved_id = Some(saved_id.into());
        self
    }

    pub fn with_exception_filter(mut self, filter: serde_json::Value) -> Self {
        self.exception_filter = Some(filter);
        self
    }
}
