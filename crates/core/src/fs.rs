//! JSON file helpers shared by binaries and file-backed stores.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::CoreError;

/// Read and deserialize a JSON document from disk.
pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, CoreError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&raw)?)
}
