//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub file: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.file.display());

        match CliConfig::from_file(&self.file).and_then(|config| {
            config.validate()?;
            Ok(config)
        }) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Chunk size: {}", config.splitter.max_chars);
                println!("  Translator: {}", config.translator.endpoint);
                println!("  Scheme: {}", config.translator.scheme);
                println!("  Server: {}", config.server.addr);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
