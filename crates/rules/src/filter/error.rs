//! Error types for filter resolution.

use crate::schema::RuleType;
use crate::store::StoreError;

/// Errors returned by [`resolve_filter`](super::resolve_filter).
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Required request fields are missing for the selected path.
    #[error("{0}")]
    InvalidRequest(String),

    /// Rule types that never run through a search filter.
    #[error("Unsupported Rule of type \"{0}\" supplied to filter resolution")]
    UnsupportedRuleType(RuleType),

    /// A rule type outside the known set reached the resolver boundary.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Saved query could not be fetched and no inline fallback was given.
    #[error("Failed to fetch saved query. \"{source}\"")]
    Retrieval {
        #[source]
        source: StoreError,
    },

    /// Store error passed through unchanged.
    #[error(transparent)]
    Store(StoreError),

    /// The query builder rejected its input.
    #[error("Query build failed: {0}")]
    QueryBuild(String),
}

impl FilterError {
    /// Whether the caller sent a request that can never succeed as-is.
    pub fn is_client_error(&self) -> bool {
        match self {
            FilterError::InvalidRequest(_)
            | FilterError::UnsupportedRuleType(_)
            | FilterError::QueryBuild(_) => true,
            FilterError::Internal(_) | FilterError::Retrieval { .. } | FilterError::Store(_) => {
                false
            }
        }
    }
}
