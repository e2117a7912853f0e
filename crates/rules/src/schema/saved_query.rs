//! Saved query attributes as stored by the saved-objects service.

use serde::{Deserialize, Serialize};

use super::QueryLanguage;

/// Query text plus language, nested under `query` in the stored object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedQueryText {
    pub query: String,
    pub language: QueryLanguage,
}

/// Attributes of a saved object of kind `query`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedQueryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub query: SavedQueryText,
    #[serde(default)]
    pub filters: Vec<serde_json::Value>,
}

impl SavedQueryRecord {
    pub fn new(query: impl Into<String>, language: QueryLanguage) -> Self {
        Self {
            title: None,
            description: None,
            query: SavedQueryText {
                query: query.into(),
                language,
            },
            filters: Vec::new(),
        }
    }

    pub fn with_filters(mut self, filters: Vec<serde_json::Value>) -> Self {
        self.filters = filters;
        self
    }
}
