//! Workflow command implementation

use anyhow::{Context, Result};
use clap::Args;
use hinglish_engine::{run_workflow_with_progress, WorkflowOptions};
use std::path::PathBuf;

use super::{block_on, RunContext};
use crate::output::{OutputFormat, Report};
use crate::progress::ProgressReporter;

/// Arguments for the workflow command
#[derive(Debug, Args)]
pub struct WorkflowArgs {
    /// English document to translate
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Final Hinglish file (default: <stem>_complete_hinglish.txt beside the input)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum characters per chunk file
    #[arg(short = 'c', long, value_name = "CHUNK_SIZE", allow_negative_numbers = true)]
    pub chunk_size: Option<i64>,

    /// Folder for translated chunks (default: <chunk folder>_translated)
    #[arg(long, value_name = "DIR")]
    pub translated_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl WorkflowArgs {
    /// Build workflow options from the configuration and flags
    pub fn options(&self, ctx: &RunContext) -> Result<WorkflowOptions> {
        Ok(WorkflowOptions {
            split: ctx.config.split_options(self.chunk_size)?,
            translated_dir: self.translated_dir.clone(),
            output: self.output.clone(),
            separator: ctx.config.merger.separator.clone(),
        })
    }

    /// Execute the workflow command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        let options = self.options(ctx)?;
        let pipeline = ctx.config.build_pipeline()?;

        log::info!("Starting workflow for {}", self.input.display());

        let mut progress = ProgressReporter::new(ctx.quiet);
        let report = block_on(run_workflow_with_progress(
            &pipeline,
            &self.input,
            &options,
            |done, total| progress.update(done, total, "chunks"),
        ))?
        .with_context(|| format!("Workflow failed for {}", self.input.display()))?;
        progress.finish();

        if report.failed_count() > 0 {
            log::warn!(
                "{} of {} chunks failed to translate and are missing from {}",
                report.failed_count(),
                report.split.files_created(),
                report.output().display()
            );
        }

        let mut formatter = self.format.stdout_formatter();
        formatter.format_report(&Report::Workflow(report))?;
        formatter.finish()
    }
}
