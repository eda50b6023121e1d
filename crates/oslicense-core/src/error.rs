//! Error taxonomy for license resolution.
//!
//! Every failure the registry client or resolver can produce is one of these
//! variants, so the CLI can print a single human-readable message and exit.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LicenseError {
    /// Transport-level failure (connect, timeout, TLS, invalid URL).
    #[error("network error: {0}")]
    Network(#[from] curl::Error),

    /// Response body was not valid JSON.
    #[error("invalid response received from the license registry")]
    Parse(#[source] serde_json::Error),

    /// The registry answered with its own error payload instead of a record.
    /// `messages` holds the consolidated error messages, printed one per line.
    #[error("{}", .messages.join("\n"))]
    Registry { messages: Vec<String> },

    /// A fetched record carries no usable identifier to look up text with.
    #[error("license record for '{id}' has no usable identifier")]
    RecordMalformed { id: String },

    /// The text mirror had no body for this identifier.
    #[error("license text not found for '{id}'")]
    TextNotFound { id: String },

    /// No explicit identifier, no manifest field, no configured default.
    #[error("no license specified and none found in a nearby package.json")]
    NoLicenseSpecified,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_error_joins_messages_one_per_line() {
        let err = LicenseError::Registry {
            messages: vec!["unknown license".to_string(), "try --list".to_string()],
        };
        assert_eq!(err.to_string(), "unknown license\ntry --list");
    }

    #[test]
    fn text_not_found_names_the_identifier() {
        let err = LicenseError::TextNotFound {
            id: "MIT".to_string(),
        };
        assert!(err.to_string().contains("'MIT'"));
    }
}
