//! License resolution: explicit argument, nearest manifest, configured
//! default — in that order — then text fetch via the registry client.

use std::path::Path;

use crate::error::LicenseError;
use crate::manifest;
use crate::registry::{RegistryClient, TextSource};

/// Determines the effective license identifier without touching the network.
///
/// Precedence: non-empty `explicit` argument, then the nearest manifest
/// relative to `start_dir`, then a non-empty `default_license` from config.
/// Never silently guesses beyond that.
pub fn effective_identifier(
    explicit: Option<&str>,
    start_dir: &Path,
    default_license: Option<&str>,
) -> Result<String, LicenseError> {
    if let Some(id) = non_empty(explicit) {
        return Ok(id);
    }
    if let Some(id) = manifest::nearest_license(start_dir) {
        return Ok(id);
    }
    if let Some(id) = non_empty(default_license) {
        tracing::info!("falling back to configured default license '{}'", id);
        return Ok(id);
    }
    Err(LicenseError::NoLicenseSpecified)
}

/// Resolves an optional explicit identifier to license text.
pub fn resolve(
    client: &RegistryClient,
    explicit: Option<&str>,
    start_dir: &Path,
    default_license: Option<&str>,
) -> Result<String, LicenseError> {
    let id = effective_identifier(explicit, start_dir, default_license)?;
    tracing::debug!("resolving license text for '{}'", id);
    client.license_text(TextSource::Id(&id))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
