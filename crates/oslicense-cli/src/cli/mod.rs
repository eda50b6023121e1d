//! CLI for the oslicense tool.

mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;
use oslicense_core::config;
use oslicense_core::registry::RegistryClient;
use std::path::PathBuf;

use commands::{run_fetch, run_list};

/// Fetch OSI license text and generate a LICENSE.md file.
#[derive(Debug, Parser)]
#[command(name = "oslicense", version)]
#[command(about = "Fetch OSI license text and generate a LICENSE.md file", long_about = None)]
pub struct Cli {
    /// License ID (case sensitive), e.g. "MIT". When omitted, the license
    /// field of the nearest package.json is used.
    pub license: Option<String>,

    /// List available licenses with their IDs.
    #[arg(short, long)]
    pub list: bool,

    /// Alternate file name/path for the generated license file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print license text to stdout instead of generating a license file.
    #[arg(short, long)]
    pub stdout: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let client = RegistryClient::from_config(&cfg)?;

        if cli.list {
            return run_list(&client);
        }
        run_fetch(
            &client,
            &cfg,
            cli.license.as_deref(),
            cli.output.as_deref(),
            cli.stdout,
        )
    }
}

#[cfg(test)]
mod tests;
