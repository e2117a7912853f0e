//! Saved-object access for filter resolution.
//!
//! The resolver only depends on the [`SavedObjectsClient`] trait. Two
//! implementations ship with the crate: [`InMemorySavedObjects`] for
//! file-backed fixtures and tests, and [`OpenSearchSavedObjects`] which
//! reads saved objects straight from the saved-objects index.

mod memory;
mod opensearch;

pub use memory::InMemorySavedObjects;
pub use opensearch::OpenSearchSavedObjects;

use crate::schema::SavedQueryRecord;

/// Saved-object kind under which saved queries are stored.
pub const SAVED_QUERY_KIND: &str = "query";

/// Read access to saved objects.
#[async_trait::async_trait]
pub trait SavedObjectsClient: Send + Sync {
    /// Fetch the saved query stored under `kind`/`id`.
    async fn get(&self, kind: &str, id: &str) -> Result<SavedQueryRecord, StoreError>;
}

/// Errors from a saved-object fetch.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Saved object [{kind}/{id}] not found")]
    NotFound { kind: String, id: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Saved objects index returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode saved object: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl StoreError {
    pub fn not_found(kind: &str, id: &str) -> Self {
        StoreError::NotFound {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
