//! Tests for schema types.

use super::*;
use crate::filter::FilterError;

const SAVED_QUERY_RULE_JSON: &str = r#"
{
  "type": "saved_query",
  "savedId": "c7a0b3e0-failed-logins",
  "index": ["logs-*", "auditbeat-*"],
  "query": "event.outcome:failure",
  "language": "kuery",
  "filters": [
    { "meta": { "disabled": false, "negate": false }, "query": { "match_phrase": { "host.name": "db-01" } } }
  ],
  "exceptionFilter": {
    "meta": { "negate": true },
    "query": { "bool": { "should": [{ "match_phrase": { "user.name": "svc-backup" } }] } }
  }
}
"#;

const SAVED_QUERY_RECORD_JSON: &str = r#"
{
  "title": "Failed logins",
  "description": "Authentication failures across hosts",
  "query": { "query": "event.category:authentication and event.outcome:failure", "language": "kuery" },
  "filters": [{ "exists": { "field": "source.ip" } }]
}
"#;

#[test]
fn parse_saved_query_request_with_camel_case_keys() {
    let req: RuleFilterRequest = serde_json::from_str(SAVED_QUERY_RULE_JSON).unwrap();

    assert_eq!(req.rule_type, RuleType::SavedQuery);
    assert_eq!(req.saved_id.as_deref(), Some("c7a0b3e0-failed-logins"));
    assert_eq!(
        req.index,
        Some(vec!["logs-*".to_string(), "auditbeat-*".to_string()])
    );
    assert_eq!(req.language, Some(QueryLanguage::Kuery));
    assert_eq!(req.filters.as_ref().map(Vec::len), Some(1));
    assert!(req.exception_filter.is_some());
}

#[test]
fn parse_minimal_request_leaves_optionals_unset() {
    let req: RuleFilterRequest = serde_json::from_str(r#"{ "type": "eql" }"#).unwrap();
    assert_eq!(req, RuleFilterRequest::new(RuleType::Eql));
}

#[test]
fn unknown_rule_type_is_rejected_at_parse_time() {
    let err = serde_json::from_str::<RuleFilterRequest>(r#"{ "type": "esql" }"#).unwrap_err();
    assert!(err.to_string().contains("unexpected rule type: 'esql'"));

    let err = "esql".parse::<RuleType>().unwrap_err();
    assert!(matches!(err, FilterError::Internal(_)));
}

#[test]
fn rule_type_names_match_wire_format() {
    for rule_type in RuleType::ALL {
        let json = serde_json::to_value(rule_type).unwrap();
        assert_eq!(json, serde_json::Value::String(rule_type.to_string()));
        assert_eq!(rule_type.as_str().parse::<RuleType>().unwrap(), rule_type);
    }
    assert_eq!(RuleType::MachineLearning.to_string(), "machine_learning");
    assert_eq!(RuleType::NewTerms.to_string(), "new_terms");
}

#[test]
fn unknown_language_is_a_parse_error() {
    let err = serde_json::from_str::<RuleFilterRequest>(
        r#"{ "type": "query", "query": "a:b", "language": "sql" }"#,
    );
    assert!(err.is_err());
}

#[test]
fn parse_saved_query_record() {
    let record: SavedQueryRecord = serde_json::from_str(SAVED_QUERY_RECORD_JSON).unwrap();

    assert_eq!(record.title.as_deref(), Some("Failed logins"));
    assert_eq!(record.query.language, QueryLanguage::Kuery);
    assert_eq!(
        record.query.query,
        "event.category:authentication and event.outcome:failure"
    );
    assert_eq!(record.filters.len(), 1);
}

#[test]
fn saved_query_record_filters_default_to_empty() {
    let record: SavedQueryRecord = serde_json::from_str(
        r#"{ "query": { "query": "*", "language": "lucene" } }"#,
    )
    .unwrap();
    assert!(record.filters.is_empty());
    assert_eq!(record, SavedQueryRecord::new("*", QueryLanguage::Lucene));
}

#[test]
fn bool_query_serializes_in_search_dsl_shape() {
    let mut q = BoolQuery::default();
    assert!(q.is_match_all());

    q.bool_query
        .filter
        .push(serde_json::json!({ "term": { "event.outcome": "failure" } }));
    let json = serde_json::to_value(&q).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "bool": {
                "must": [],
                "filter": [{ "term": { "event.outcome": "failure" } }],
                "should": [],
                "must_not": []
            }
        })
    );
    assert!(!q.is_match_all());
}
