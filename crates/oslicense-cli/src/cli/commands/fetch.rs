//! Default command: resolve a license and write it to a file or stdout.

use anyhow::Result;
use oslicense_core::config::OslConfig;
use oslicense_core::registry::RegistryClient;
use oslicense_core::resolver;
use std::io::Write;
use std::path::Path;

use crate::cli::output;

pub fn run_fetch(
    client: &RegistryClient,
    cfg: &OslConfig,
    license: Option<&str>,
    output_path: Option<&Path>,
    to_stdout: bool,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let text = resolver::resolve(client, license, &cwd, cfg.default_license.as_deref())?;

    if to_stdout {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{text}")?;
        return Ok(());
    }

    let path = output::write_license_file(&text, output_path)?;
    println!("License file created at '{}'", path.display());
    println!("Don't forget to fill in the blanks!");
    Ok(())
}
