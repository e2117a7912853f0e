//! Bool query output handed to the rule executor.

use serde::{Deserialize, Serialize};

/// Clause lists of an Elasticsearch/OpenSearch `bool` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoolClauses {
    #[serde(default)]
    pub must: Vec<serde_json::Value>,
    #[serde(default)]
    pub filter: Vec<serde_json::Value>,
    #[serde(default)]
    pub should: Vec<serde_json::Value>,
    #[serde(default)]
    pub must_not: Vec<serde_json::Value>,
}

/// `{ "bool": { must, filter, should, must_not } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoolQuery {
    #[serde(rename = "bool")]
    pub bool_query: BoolClauses,
}

impl BoolQuery {
    pub fn is_match_all(&self) -> bool {
        let b = &self.bool_query;
        b.must.is_empty() && b.filter.is_empty() && b.should.is_empty() && b.must_not.is_empty()
    }
}
