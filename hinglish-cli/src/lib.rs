//! Hinglish CLI library
//!
//! This library provides the command-line interface for splitting English
//! documents into chunks, translating them into Hinglish and merging the
//! results back together.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

pub use commands::{Commands, RunContext};
pub use config::CliConfig;
pub use error::{CliError, CliResult};

/// English to Hinglish toolkit
#[derive(Debug, Parser)]
#[command(name = "hinglish", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file
    #[arg(long, global = true, value_name = "FILE", env = "HINGLISH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Run the selected command
    pub fn run(&self) -> CliResult<()> {
        init_logging(self.verbose, self.quiet);

        log::debug!("Arguments: {:?}", self);

        let config = if self.command.uses_config() {
            CliConfig::load(self.config.as_deref())?
        } else {
            CliConfig::default()
        };
        let ctx = RunContext {
            config,
            quiet: self.quiet,
        };

        self.command.execute(&ctx)
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let env = env_logger::Env::default().default_filter_or(log_level);
        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}
