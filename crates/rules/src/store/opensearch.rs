//! Saved objects read directly from the saved-objects index.
//!
//! Saved objects are stored as documents with id `{kind}:{id}` and the
//! attributes nested under a `{kind}` key of `_source`.

use detect_core::OpenSearchConfig;

use crate::schema::SavedQueryRecord;

use super::{SavedObjectsClient, StoreError};

/// [`SavedObjectsClient`] backed by the OpenSearch document API.
#[derive(Debug, Clone)]
pub struct OpenSearchSavedObjects {
    base_url: String,
    index: String,
    username: Option<String>,
    password: Option<String>,
    /// Shared HTTP client (connection pooling).
    client: reqwest::Client,
}

impl OpenSearchSavedObjects {
    pub fn new(base_url: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            index: index.into(),
            username: None,
            password: None,
            client: reqwest::Client::new(),
        }
    }

    /// Build from config, applying basic auth and the request timeout.
    pub fn from_config(config: &OpenSearchConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            base_url: config.base_url(),
            index: config.saved_objects_index.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            client,
        })
    }

    pub fn with_basic_auth(mut self, username: impl Into<String>, password: Option<String>) -> Self {
        self.username = Some(username.into());
        self.password = password;
        self
    }

    /// `{base}/{index}/_doc/{kind}:{id}` with every segment percent-encoded,
    /// so reserved characters in an id never alter the path or query.
    fn document_url(&self, kind: &str, id: &str) -> Result<reqwest::Url, StoreError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| StoreError::Other(format!("invalid OpenSearch base url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| StoreError::Other(format!("OpenSearch base url cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .push(&self.index)
            .push("_doc")
            .push(&format!("{kind}:{id}"));
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SavedObjectsClient for OpenSearchSavedObjects {
    async fn get(&self, kind: &str, id: &str) -> Result<SavedQueryRecord, StoreError> {
        let url = self.document_url(kind, id)?;
        let mut request = self.client.get(url.clone());
        if let Some(ref username) = self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::not_found(kind, id));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(%url, %status, "saved objects index returned non-2xx status");
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let doc: serde_json::Value = response.json().await?;
        if !doc.get("found").and_then(serde_json::Value::as_bool).unwrap_or(true) {
            return Err(StoreError::not_found(kind, id));
        }

        let attributes = doc
            .get("_source")
            .and_then(|source| source.get(kind))
            .cloned()
            .ok_or_else(|| StoreError::Decode(format!("document has no `_source.{}` attributes", kind)))?;

        serde_json::from_value(attributes).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_url_escapes_reserved_characters_in_id() {
        let store = OpenSearchSavedObjects::new("http://search.internal:9200/", ".kibana");

        let url = store.document_url("query", "failed-logins").unwrap();
        assert_eq!(url.as_str(), "http://search.internal:9200/.kibana/_doc/query:failed-logins");

        let url = store.document_url("query", "public#secret?x=1").unwrap();
        assert_eq!(
            url.as_str(),
            "http://search.internal:9200/.kibana/_doc/query:public%23secret%3Fx=1"
        );
        assert!(url.fragment().is_none());
        assert!(url.query().is_none());

        let url = store.document_url("query", "../other/100%").unwrap();
        assert_eq!(
            url.as_str(),
            "http://search.internal:9200/.kibana/_doc/query:..%2Fother%2F100%25"
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let store = OpenSearchSavedObjects::new("not a url", ".kibana");
        let err = store.document_url("query", "abc").unwrap_err();
        assert!(err.to_string().contains("invalid OpenSearch base url"));
    }
}
