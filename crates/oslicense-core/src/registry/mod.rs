//! OSI license registry client.
//!
//! Talks to two remote surfaces: the metadata API (structured license
//! records) and a raw-text mirror serving plain-text license bodies keyed by
//! identifier. See
//! https://github.com/OpenSourceOrg/api/blob/master/doc/endpoints.md for the
//! API endpoints.

mod http;
mod types;

pub use types::{LicenseRecord, TextVersion};

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use url::Url;

use crate::config::OslConfig;
use crate::error::LicenseError;

/// Public OSI metadata API base.
pub const OSI_API_BASE: &str = "https://api.opensource.org/";
/// Raw plain-text license bodies, addressed directly by identifier.
pub const OSI_TEXT_BASE: &str =
    "https://raw.githubusercontent.com/OpenSourceOrg/licenses/master/texts/plain/";

/// What `license_text` is given: a bare identifier (record is fetched first)
/// or a record already in hand.
#[derive(Debug)]
pub enum TextSource<'a> {
    Id(&'a str),
    Record(&'a LicenseRecord),
}

/// Client for the license registry. Stateless; each call issues one blocking
/// request (two for `license_text` from a bare identifier).
#[derive(Debug, Clone)]
pub struct RegistryClient {
    api_base: String,
    text_base: String,
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::osi()
    }
}

impl RegistryClient {
    /// Client against the public OSI endpoints.
    pub fn osi() -> Self {
        Self {
            api_base: OSI_API_BASE.to_string(),
            text_base: OSI_TEXT_BASE.to_string(),
        }
    }

    /// Client with custom bases (mirrors, test servers). Both must parse as
    /// absolute URLs; a missing trailing slash is added.
    pub fn with_bases(api_base: &str, text_base: &str) -> Result<Self> {
        Url::parse(api_base).with_context(|| format!("invalid API base URL: {api_base}"))?;
        Url::parse(text_base).with_context(|| format!("invalid text base URL: {text_base}"))?;
        Ok(Self {
            api_base: with_trailing_slash(api_base),
            text_base: with_trailing_slash(text_base),
        })
    }

    /// Client honoring any base overrides from the config file.
    pub fn from_config(cfg: &OslConfig) -> Result<Self> {
        let osi = Self::osi();
        Self::with_bases(
            cfg.api_base.as_deref().unwrap_or(&osi.api_base),
            cfg.text_base.as_deref().unwrap_or(&osi.text_base),
        )
    }

    /// Fetches the full license listing and projects it to id -> display name.
    pub fn list_licenses(&self) -> Result<BTreeMap<String, String>, LicenseError> {
        let url = format!("{}licenses/", self.api_base);
        let value = self.get_json(&url)?;
        let records: Vec<LicenseRecord> =
            serde_json::from_value(value).map_err(LicenseError::Parse)?;

        Ok(records
            .into_iter()
            .filter(|r| !r.id.is_empty())
            .map(|r| (r.id, r.name))
            .collect())
    }

    /// Fetches the record for one license ID (case sensitive).
    pub fn license_record(&self, id: &str) -> Result<LicenseRecord, LicenseError> {
        let url = format!("{}license/{}", self.api_base, id);
        let value = self.get_json(&url)?;
        serde_json::from_value(value).map_err(LicenseError::Parse)
    }

    /// Fetches the plain license text for an identifier or record.
    ///
    /// A bare identifier is validated against the registry first (so an
    /// unknown ID surfaces the registry's own error message, not a bare 404
    /// from the mirror). Text is fetched from the raw-text mirror; any
    /// non-2xx status or empty body is TextNotFound. The result is trimmed.
    pub fn license_text(&self, source: TextSource<'_>) -> Result<String, LicenseError> {
        let id = match source {
            TextSource::Id(id) => self.license_record(id)?.id,
            TextSource::Record(record) => record.id.clone(),
        };
        if id.is_empty() {
            return Err(LicenseError::RecordMalformed { id });
        }

        let url = format!("{}{}", self.text_base, id);
        let resp = http::get(&url)?;
        if !http::is_success(resp.status) {
            return Err(LicenseError::TextNotFound { id });
        }

        let text = String::from_utf8_lossy(&resp.body).trim().to_string();
        if text.is_empty() {
            return Err(LicenseError::TextNotFound { id });
        }
        Ok(text)
    }

    /// GET a registry endpoint and parse the body as JSON, surfacing a
    /// registry error payload if present. The registry encodes failures in
    /// the body rather than the status line, so the status is not checked.
    fn get_json(&self, url: &str) -> Result<serde_json::Value, LicenseError> {
        let resp = http::get(url)?;
        let value: serde_json::Value =
            serde_json::from_slice(&resp.body).map_err(LicenseError::Parse)?;
        types::check_error_payload(&value)?;
        Ok(value)
    }
}

fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_points_at_osi() {
        let client = RegistryClient::default();
        assert_eq!(client.api_base, OSI_API_BASE);
        assert_eq!(client.text_base, OSI_TEXT_BASE);
    }

    #[test]
    fn with_bases_normalizes_trailing_slash() {
        let client =
            RegistryClient::with_bases("http://127.0.0.1:8080", "http://127.0.0.1:8080/texts")
                .unwrap();
        assert_eq!(client.api_base, "http://127.0.0.1:8080/");
        assert_eq!(client.text_base, "http://127.0.0.1:8080/texts/");
    }

    #[test]
    fn with_bases_rejects_relative_urls() {
        assert!(RegistryClient::with_bases("not a url", OSI_TEXT_BASE).is_err());
        assert!(RegistryClient::with_bases(OSI_API_BASE, "/texts/only/a/path").is_err());
    }

    #[test]
    fn from_config_applies_overrides() {
        let cfg = OslConfig {
            default_license: None,
            api_base: Some("http://localhost:9000".to_string()),
            text_base: None,
        };
        let client = RegistryClient::from_config(&cfg).unwrap();
        assert_eq!(client.api_base, "http://localhost:9000/");
        assert_eq!(client.text_base, OSI_TEXT_BASE);
    }

    #[test]
    fn text_from_record_without_id_is_malformed() {
        let client = RegistryClient::osi();
        let record: LicenseRecord = serde_json::from_str(r#"{"name": "Mystery"}"#).unwrap();
        match client.license_text(TextSource::Record(&record)) {
            Err(LicenseError::RecordMalformed { .. }) => {}
            other => panic!("expected RecordMalformed, got {:?}", other.err()),
        }
    }
}
