//! JSON encoding for the shared shapes.
//!
//! Thin wrappers over `serde_json` that map failures into
//! [`VizTypesError`]. Unset optional fields are omitted on encode and come
//! back unset on decode.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::VizTypesError;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, VizTypesError> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, VizTypesError> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, VizTypesError> {
    from_json_slice(json.as_bytes())
}

pub fn from_json_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, VizTypesError> {
    serde_json::from_slice(bytes).map_err(|e| {
        debug!(error = %e, len = bytes.len(), "failed to decode viz json");
        VizTypesError::from(e)
    })
}
