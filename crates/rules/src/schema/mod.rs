//! Rule-side types for filter resolution.
//!
//! - `RuleType`: closed set of detection strategies
//! - `RuleFilterRequest`: inline query parameters and saved-query reference
//! - `SavedQueryRecord`: attributes of a stored saved query
//! - `BoolQuery`: the resolved search filter

mod bool_query;
mod kind;
mod language;
mod request;
mod saved_query;

pub use bool_query::*;
pub use kind::*;
pub use language::*;
pub use request::*;
pub use saved_query::*;

#[cfg(test)]
mod tests;
