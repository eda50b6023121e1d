//! Nearest-manifest license lookup.
//!
//! Walks from a starting directory up to the filesystem root looking for a
//! `package.json` with a non-empty string `license` field. Read-only; a
//! manifest that is missing, unparseable, or lacks the field is skipped and
//! the scan continues upward.

use std::fs;
use std::path::Path;

/// Manifest filename checked at each directory level.
pub const MANIFEST_FILE: &str = "package.json";

/// Returns the license ID from the nearest manifest relative to `start_dir`,
/// or `None` if no ancestor directory declares one.
pub fn nearest_license(start_dir: &Path) -> Option<String> {
    let mut dir = Some(start_dir);
    while let Some(d) = dir {
        let candidate = d.join(MANIFEST_FILE);
        if candidate.is_file() {
            if let Some(license) = license_field(&candidate) {
                tracing::debug!("license '{}' from {}", license, candidate.display());
                return Some(license);
            }
        }
        dir = d.parent();
    }
    None
}

/// Reads the `license` field from one manifest file. Only a non-empty string
/// field qualifies; object-form license declarations are ignored.
fn license_field(path: &Path) -> Option<String> {
    let data = fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&data).ok()?;
    let license = value.get("license")?.as_str()?.trim();
    if license.is_empty() {
        None
    } else {
        Some(license.to_string())
    }
}
