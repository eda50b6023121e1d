//! Output dispatcher: write license text to a file, never overwriting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default filename when no --output path is given (or the path is a
/// directory).
pub const DEFAULT_FILENAME: &str = "LICENSE.md";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("license file already exists at '{}'", .0.display())]
    AlreadyExists(PathBuf),

    #[error("license file could not be written at '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `text` (newline-terminated) to `path`, defaulting to `LICENSE.md`
/// in the current directory. A path naming an existing directory gets the
/// default filename appended. Refuses to overwrite an existing file.
/// Returns the absolute path written.
pub fn write_license_file(text: &str, path: Option<&Path>) -> Result<PathBuf, OutputError> {
    let target = resolve_target(path)?;

    if target.exists() {
        return Err(OutputError::AlreadyExists(target));
    }

    let mut body = text.to_string();
    if !body.ends_with('\n') {
        body.push('\n');
    }
    fs::write(&target, body).map_err(|source| OutputError::Write {
        path: target.clone(),
        source,
    })?;

    tracing::info!("wrote license file at {}", target.display());
    Ok(target)
}

/// Resolves the target path: default filename, directory redirection,
/// absolutization against the current directory.
fn resolve_target(path: Option<&Path>) -> Result<PathBuf, OutputError> {
    let given = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME));

    let target = if given.is_dir() {
        given.join(DEFAULT_FILENAME)
    } else {
        given
    };

    if target.is_absolute() {
        return Ok(target);
    }
    let cwd = std::env::current_dir().map_err(|source| OutputError::Write {
        path: target.clone(),
        source,
    })?;
    Ok(cwd.join(target))
}
