//! Rule-type dispatch and saved-query fallback.

use std::sync::Arc;

use tracing::Instrument;

use crate::schema::{BoolQuery, RuleFilterRequest, RuleType};
use crate::store::{SavedObjectsClient, StoreError, SAVED_QUERY_KIND};

use super::builder::BoolQueryBuilder;
use super::error::FilterError;
use super::span::{SecuritySpans, SpanWrapper};
use super::types::{QueryFilterBuilder, QueryFilterParams};

/// Span name for the saved-query fetch.
pub const SAVED_FILTER_SPAN: &str = "getSavedFilter";

const MISSING_QUERY_PARAMS: &str = "query, filters, and index parameter should be defined";
const MISSING_SAVED_ID: &str = "savedId parameter should be defined";

/// Resolves rule requests into bool queries.
///
/// Holds no per-call state; share one instance (behind an `Arc` if
/// needed) across all concurrent rule executions.
#[derive(Clone)]
pub struct FilterResolver {
    client: Arc<dyn SavedObjectsClient>,
    builder: Arc<dyn QueryFilterBuilder>,
    spans: Arc<dyn SpanWrapper>,
}

impl FilterResolver {
    /// Resolver with the default [`BoolQueryBuilder`] and [`SecuritySpans`].
    pub fn new(client: Arc<dyn SavedObjectsClient>) -> Self {
        Self {
            client,
            builder: Arc::new(BoolQueryBuilder),
            spans: Arc::new(SecuritySpans),
        }
    }

    pub fn with_builder(mut self, builder: Arc<dyn QueryFilterBuilder>) -> Self {
        self.builder = builder;
        self
    }

    pub fn with_spans(mut self, spans: Arc<dyn SpanWrapper>) -> Self {
        self.spans = spans;
        self
    }

    pub async fn resolve(&self, request: &RuleFilterRequest) -> Result<BoolQuery, FilterError> {
        resolve_filter(
            request,
            self.client.as_ref(),
            self.builder.as_ref(),
            self.spans.as_ref(),
        )
        .await
    }
}

/// Build the bool query a rule execution searches with.
///
/// Query-like rules build from their inline parameters. Saved-query rules
/// load the referenced saved query first and fall back to inline
/// parameters when the load fails and they are complete.
pub async fn resolve_filter(
    request: &RuleFilterRequest,
    client: &dyn SavedObjectsClient,
    builder: &dyn QueryFilterBuilder,
    spans: &dyn SpanWrapper,
) -> Result<BoolQuery, FilterError> {
    match request.rule_type {
        RuleType::Query | RuleType::ThreatMatch | RuleType::Threshold | RuleType::NewTerms => {
            query_filter(request, builder)
        }
        RuleType::SavedQuery => saved_query_filter(request, client, builder, spans).await,
        RuleType::MachineLearning | RuleType::Eql => {
            Err(FilterError::UnsupportedRuleType(request.rule_type))
        }
    }
}

/// Inline parameters, present only when query, language and index all are.
fn inline_params(request: &RuleFilterRequest) -> Option<QueryFilterParams<'_>> {
    match (&request.query, request.language, &request.index) {
        (Some(query), Some(language), Some(index)) => Some(QueryFilterParams {
            query,
            language,
            filters: request.filters.as_deref().unwrap_or(&[]),
            index,
            exception_filter: request.exception_filter.as_ref(),
        }),
        _ => None,
    }
}

fn query_filter(
    request: &RuleFilterRequest,
    builder: &dyn QueryFilterBuilder,
) -> Result<BoolQuery, FilterError> {
    let params = inline_params(request)
        .ok_or_else(|| FilterError::InvalidRequest(MISSING_QUERY_PARAMS.to_string()))?;
    builder.build(params)
}

async fn saved_query_filter(
    request: &RuleFilterRequest,
    client: &dyn SavedObjectsClient,
    builder: &dyn QueryFilterBuilder,
    spans: &dyn SpanWrapper,
) -> Result<BoolQuery, FilterError> {
    let (Some(saved_id), Some(index)) = (request.saved_id.as_deref(), request.index.as_deref())
    else {
        return Err(FilterError::InvalidRequest(MISSING_SAVED_ID.to_string()));
    };

    let fetched = client
        .get(SAVED_QUERY_KIND, saved_id)
        .instrument(spans.span(SAVED_FILTER_SPAN))
        .await;

    match fetched {
        Ok(record) => builder.build(QueryFilterParams {
            query: &record.query.query,
            language: record.query.language,
            filters: &record.filters,
            index,
            exception_filter: request.exception_filter.as_ref(),
        }),
        Err(err) => match classify_fetch_failure(request, err) {
            FetchFailure::Fallback(params, err) => {
                tracing::debug!(
                    saved_id,
                    error = %err,
                    "Saved query unavailable, building from inline rule query"
                );
                builder.build(params)
            }
            FetchFailure::Retrieval(source) => Err(FilterError::Retrieval { source }),
            FetchFailure::Rethrow(err) => Err(FilterError::Store(err)),
        },
    }
}

/// What to do after a saved-query fetch failed.
enum FetchFailure<'a> {
    /// Inline parameters are complete; the fetch error is dropped.
    Fallback(QueryFilterParams<'a>, StoreError),
    /// Wrap the store error as a retrieval failure.
    Retrieval(StoreError),
    /// Neither holds; hand the store error back untouched.
    Rethrow(StoreError),
}

fn classify_fetch_failure(request: &RuleFilterRequest, err: StoreError) -> FetchFailure<'_> {
    if let Some(params) = inline_params(request) {
        return FetchFailure::Fallback(params, err);
    }
    let has_saved_id = request.saved_id.as_deref().is_some_and(|id| !id.is_empty());
    if has_saved_id && request.index.is_some() {
        FetchFailure::Retrieval(err)
    } else {
        FetchFailure::Rethrow(err)
    }
}
