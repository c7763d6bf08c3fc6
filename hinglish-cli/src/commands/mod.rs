//! CLI command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use std::future::Future;

use crate::config::CliConfig;

pub mod generate_config;
pub mod merge;
pub mod serve;
pub mod split;
pub mod translate;
pub mod validate;
pub mod workflow;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into numbered chunk files
    Split(split::SplitArgs),

    /// Merge a folder of numbered chunk files into one file
    Merge(merge::MergeArgs),

    /// Translate text, a file or a chunk folder into Hinglish
    Translate(translate::TranslateArgs),

    /// Split, translate and merge a document in one go
    Workflow(workflow::WorkflowArgs),

    /// Run the translation REST service
    Serve(serve::ServeArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Whether the command reads the global configuration file
    pub fn uses_config(&self) -> bool {
        !matches!(self, Commands::GenerateConfig(_) | Commands::Validate(_))
    }

    /// Execute the selected command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(ctx),
            Commands::Merge(args) => args.execute(ctx),
            Commands::Translate(args) => args.execute(ctx),
            Commands::Workflow(args) => args.execute(ctx),
            Commands::Serve(args) => args.execute(ctx),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// Settings shared by every command
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Loaded configuration
    pub config: CliConfig,
    /// Suppress progress bars
    pub quiet: bool,
}

/// Run `future` to completion on a fresh tokio runtime
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    Ok(runtime.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_commands_skip_global_config() {
        let validate = Commands::Validate(validate::ValidateArgs {
            file: PathBuf::from("a.toml"),
        });
        assert!(!validate.uses_config());

        let merge = Commands::Merge(merge::MergeArgs {
            dir: PathBuf::from("out/story"),
            output: None,
            separator: None,
            format: crate::output::OutputFormat::Text,
        });
        assert!(merge.uses_config());
    }

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::GenerateConfig(generate_config::GenerateConfigArgs {
            output: PathBuf::from("hinglish.toml"),
        });
        let debug_str = format!("{:?}", cmd);
        assert!(debug_str.contains("GenerateConfig"));
        assert!(debug_str.contains("hinglish.toml"));
    }

    #[test]
    fn test_block_on() {
        let value = block_on(async { 40 + 2 }).unwrap();
        assert_eq!(value, 42);
    }
}
