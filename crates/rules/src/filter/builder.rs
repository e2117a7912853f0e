//! Default bool-query assembly.
//!
//! Query text is passed through as a `query_string` clause; compiling
//! KQL into structured clauses belongs to a dedicated builder injected by
//! the caller. Filters follow the saved-filter layout: an optional `meta`
//! object (`disabled`, `negate`) next to either a `query` member or the
//! raw clause itself.

use serde_json::Value;

use crate::schema::{BoolQuery, QueryLanguage};

use super::error::FilterError;
use super::types::{QueryFilterBuilder, QueryFilterParams};

/// Stateless [`QueryFilterBuilder`] producing `bool` queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolQueryBuilder;

impl QueryFilterBuilder for BoolQueryBuilder {
    fn build(&self, params: QueryFilterParams<'_>) -> Result<BoolQuery, FilterError> {
        let mut out = BoolQuery::default();

        match query_clause(params.query, params.language)? {
            Some(QueryClause::Must(clause)) => out.bool_query.must.push(clause),
            Some(QueryClause::Filter(clause)) => out.bool_query.filter.push(clause),
            None => {}
        }

        // The exception filter rides along as the last filter.
        for filter in params.filters.iter().chain(params.exception_filter) {
            if meta_flag(filter, "disabled") {
                continue;
            }
            let clause = filter_clause(filter)?;
            if meta_flag(filter, "negate") {
                out.bool_query.must_not.push(clause);
            } else {
                out.bool_query.filter.push(clause);
            }
        }

        Ok(out)
    }
}

enum QueryClause {
    Must(Value),
    Filter(Value),
}

fn query_clause(query: &str, language: QueryLanguage) -> Result<Option<QueryClause>, FilterError> {
    let query = query.trim();
    match language {
        QueryLanguage::Eql => Err(FilterError::QueryBuild(
            "query language \"eql\" cannot be expressed as a bool query".to_string(),
        )),
        _ if query.is_empty() => Ok(None),
        QueryLanguage::Lucene => Ok(Some(QueryClause::Must(serde_json::json!({
            "query_string": { "query": query, "analyze_wildcard": true }
        })))),
        QueryLanguage::Kuery => Ok(Some(QueryClause::Filter(serde_json::json!({
            "query_string": { "query": query }
        })))),
    }
}

fn meta_flag(filter: &Value, flag: &str) -> bool {
    filter
        .get("meta")
        .and_then(|meta| meta.get(flag))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn filter_clause(filter: &Value) -> Result<Value, FilterError> {
    let obj = filter.as_object().ok_or_else(|| {
        FilterError::QueryBuild(format!("filter must be a JSON object, got: {}", filter))
    })?;

    if let Some(query) = obj.get("query") {
        return Ok(query.clone());
    }

    let clause: serde_json::Map<String, Value> = obj
        .iter()
        .filter(|(key, _)| key.as_str() != "meta" && key.as_str() != "$state")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Ok(Value::Object(clause))
}
