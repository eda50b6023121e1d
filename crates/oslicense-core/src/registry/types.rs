//! Registry payload structures and error-payload handling.
//!
//! The OSI API answers every endpoint with either the requested data or an
//! `errors` array; the error shape must be checked before deserializing the
//! record, since a body can carry both.

use serde::Deserialize;

use crate::error::LicenseError;

/// One license record as returned by the registry.
#[derive(Debug, Clone, Deserialize)]
pub struct LicenseRecord {
    /// Case-sensitive license identifier (e.g. "MIT").
    #[serde(default)]
    pub id: String,
    /// Human-readable display name.
    #[serde(default)]
    pub name: String,
    /// Known text versions for this license, in registry order.
    #[serde(default, rename = "text")]
    pub texts: Vec<TextVersion>,
}

/// One text version entry inside a record: a location plus optional metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct TextVersion {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "media_type")]
    pub media_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEntry {
    #[serde(default)]
    message: Option<String>,
}

/// Fails with `LicenseError::Registry` if the body carries a non-empty
/// `errors` array, consolidating the messages. A body without that key (or
/// with an empty array) passes through.
pub(crate) fn check_error_payload(value: &serde_json::Value) -> Result<(), LicenseError> {
    let entries = match value.get("errors").and_then(|e| e.as_array()) {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Ok(()),
    };

    let mut messages: Vec<String> = entries
        .iter()
        .filter_map(|e| {
            serde_json::from_value::<ApiErrorEntry>(e.clone())
                .ok()
                .and_then(|e| e.message)
        })
        .filter(|m| !m.is_empty())
        .collect();

    if messages.is_empty() {
        messages.push("the license registry reported an unspecified error".to_string());
    }
    Err(LicenseError::Registry { messages })
}
