//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        std::fs::write(&self.output, CliConfig::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the alphabet, wordlist, and detector toggles");
        println!("2. Score a corpus with it:");
        println!("   surzhyk analyze -i 'corpus/*.txt' -c {}", self.output.display());

        Ok(())
    }
}
