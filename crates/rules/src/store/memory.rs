//! In-memory saved objects, optionally seeded from a JSON file.

use std::collections::HashMap;
use std::path::Path;

use detect_core::CoreError;

use crate::schema::SavedQueryRecord;

use super::{SavedObjectsClient, StoreError, SAVED_QUERY_KIND};

/// Saved objects keyed by `(kind, id)`.
///
/// Contents are fixed after construction, so concurrent reads need no
/// locking.
#[derive(Debug, Clone, Default)]
pub struct InMemorySavedObjects {
    objects: HashMap<(String, String), SavedQueryRecord>,
}

impl InMemorySavedObjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a saved query under kind `query`.
    pub fn with_saved_query(mut self, id: impl Into<String>, record: SavedQueryRecord) -> Self {
        self.objects
            .insert((SAVED_QUERY_KIND.to_string(), id.into()), record);
        self
    }

    /// Load saved queries from a JSON object of `{ "<id>": <record>, ... }`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let records: HashMap<String, SavedQueryRecord> = detect_core::read_json_file(path)?;
        let store = records
            .into_iter()
            .fold(Self::new(), |store, (id, record)| store.with_saved_query(id, record));
        tracing::debug!(count = store.len(), "Loaded saved queries from file");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait::async_trait]
impl SavedObjectsClient for InMemorySavedObjects {
    async fn get(&self, kind: &str, id: &str) -> Result<SavedQueryRecord, StoreError> {
        self.objects
            .get(&(kind.to_string(), id.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::not_found(kind, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::QueryLanguage;
    use std::io::Write;

    #[tokio::test]
    async fn get_returns_registered_record() {
        let record = SavedQueryRecord::new("event.action:logon", QueryLanguage::Kuery);
        let store = InMemorySavedObjects::new().with_saved_query("logons", record.clone());

        let fetched = store.get(SAVED_QUERY_KIND, "logons").await.unwrap();
        assert_eq!(fetched, record);
    }

    #[tokio::test]
    async fn missing_id_or_kind_is_not_found() {
        let store = InMemorySavedObjects::new()
            .with_saved_query("logons", SavedQueryRecord::new("*", QueryLanguage::Lucene));

        let err = store.get(SAVED_QUERY_KIND, "nope").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Saved object [query/nope] not found");

        let err = store.get("index-pattern", "logons").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn loads_records_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "failed-logins": {{
                    "title": "Failed logins",
                    "query": {{ "query": "event.outcome:failure", "language": "kuery" }},
                    "filters": [{{ "exists": {{ "field": "source.ip" }} }}]
                }},
                "all-hosts": {{
                    "query": {{ "query": "host.name:*", "language": "lucene" }}
                }}
            }}"#
        )
        .unwrap();

        let store = InMemorySavedObjects::from_json_file(file.path()).unwrap();
        assert_eq!(store.len(), 2);

        let record = store.get(SAVED_QUERY_KIND, "failed-logins").await.unwrap();
        assert_eq!(record.query.query, "event.outcome:failure");
        assert_eq!(record.filters.len(), 1);
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let err = InMemorySavedObjects::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::Serialize(_)));
    }
}
