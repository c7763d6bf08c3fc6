//! Split command implementation

use anyhow::Result;
use clap::Args;
use hinglish_engine::split_files_with_progress;
use std::path::PathBuf;

use super::RunContext;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::{FailedInput, OutputFormat, Report};
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Base directory for chunk folders (default: <input dir>/output)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Chunk folder name (default: input file stem; single input only)
    #[arg(short, long, value_name = "FOLDER")]
    pub folder: Option<String>,

    /// Maximum characters per chunk
    #[arg(short = 'c', long, value_name = "CHUNK_SIZE", allow_negative_numbers = true)]
    pub chunk_size: Option<i64>,

    /// Worker threads (default: one per CPU)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        let mut options = ctx.config.split_options(self.chunk_size)?;
        if let Some(dir) = &self.output {
            options = options.with_output_dir(dir);
        }
        if let Some(folder) = &self.folder {
            options = options.with_folder_name(folder);
        }
        if let Some(threads) = self.threads {
            options.threads = Some(threads);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!(
            "Splitting {} files into chunks of at most {} characters",
            files.len(),
            options.max_chars
        );

        let mut progress = ProgressReporter::new(ctx.quiet);
        progress.init(files.len() as u64, "files");

        let results = split_files_with_progress(&files, &options, |input| {
            progress.item_completed(&input.display().to_string())
        })?;

        let mut splits = Vec::new();
        let mut failures = Vec::new();
        for (input, result) in files.iter().zip(results) {
            match result {
                Ok(report) => splits.push(report),
                Err(e) => {
                    log::error!("Failed to split {}: {}", input.display(), e);
                    failures.push(FailedInput {
                        input: input.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
        progress.finish();

        let failed = failures.len();
        let mut formatter = self.format.stdout_formatter();
        formatter.format_report(&Report::Split {
            files: splits,
            failures,
        })?;
        formatter.finish()?;

        if failed > 0 {
            return Err(CliError::PartialFailure {
                failed,
                total: files.len(),
            }
            .into());
        }
        Ok(())
    }
}
