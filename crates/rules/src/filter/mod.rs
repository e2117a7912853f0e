//! Search filter resolution for rule executions.
//!
//! Each rule execution turns its rule definition into a single bool query
//! before searching. Query-like rules build it from inline parameters;
//! saved-query rules load the referenced saved query through a
//! [`SavedObjectsClient`](crate::store::SavedObjectsClient) and fall back
//! to inline parameters when the load fails.
//!
//! Query assembly is delegated to a [`QueryFilterBuilder`] and fetch
//! instrumentation to a [`SpanWrapper`], so both can be replaced.

mod builder;
mod error;
mod resolver;
mod span;
mod types;

pub use builder::BoolQueryBuilder;
pub use error::FilterError;
pub use resolver::{resolve_filter, FilterResolver, SAVED_FILTER_SPAN};
pub use span::{NoopSpans, SecuritySpans, SpanWrapper};
pub use types::{QueryFilterBuilder, QueryFilterParams};

// ── Tests ───────────────────────────────────────────────────────────
