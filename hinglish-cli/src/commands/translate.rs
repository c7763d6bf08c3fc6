//! Translate command implementation

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use hinglish_core::Scheme;
use hinglish_engine::{translate_file, translate_file_to, translate_folder_with_progress};
use std::fs;
use std::path::{Path, PathBuf};

use super::{block_on, RunContext};
use crate::error::CliError;
use crate::output::{OutputFormat, Report};
use crate::progress::ProgressReporter;

/// Arguments for the translate command
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["text", "input"])
))]
pub struct TranslateArgs {
    /// English text to translate
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// File to translate, or a folder of numbered chunk files
    #[arg(short, long, value_name = "FILE/DIR")]
    pub input: Option<PathBuf>,

    /// Output file (folder for chunk folders; default: beside the input)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Romanization scheme (itrans, iast)
    #[arg(long, value_name = "SCHEME")]
    pub scheme: Option<Scheme>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl TranslateArgs {
    /// Execute the translate command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        let mut pipeline = ctx.config.build_pipeline()?;
        if let Some(scheme) = self.scheme {
            pipeline = pipeline.with_scheme(scheme);
        }

        let report = match (&self.text, &self.input) {
            (Some(text), _) => {
                let hinglish = block_on(pipeline.to_hinglish(text))?
                    .map_err(|e| CliError::TranslationError(e.to_string()))?;
                if let Some(output) = &self.output {
                    write_text(output, &hinglish)?;
                }
                Report::Text {
                    original: text.clone(),
                    hinglish,
                }
            }
            (None, Some(input)) if input.is_dir() => {
                let mut progress = ProgressReporter::new(ctx.quiet);
                let folder = block_on(translate_folder_with_progress(
                    &pipeline,
                    input,
                    self.output.as_deref(),
                    |done, total| progress.update(done, total, "chunks"),
                ))?
                .with_context(|| format!("Failed to translate {}", input.display()))?;
                progress.finish();

                if folder.failed() > 0 {
                    log::warn!(
                        "{} chunks failed to translate; see the report for details",
                        folder.failed()
                    );
                }
                Report::Folder(folder)
            }
            (None, Some(input)) => {
                let file = match &self.output {
                    Some(output) => block_on(translate_file_to(&pipeline, input, output))?,
                    None => block_on(translate_file(&pipeline, input, None))?,
                }
                .with_context(|| format!("Failed to translate {}", input.display()))?;
                Report::File(file)
            }
            (None, None) => {
                return Err(
                    CliError::ConfigError("either --text or --input is required".into()).into(),
                )
            }
        };

        let mut formatter = self.format.stdout_formatter();
        formatter.format_report(&report)?;
        formatter.finish()
    }
}

fn write_text(output: &Path, text: &str) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, text).with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!("Saved translation to {}", output.display());
    Ok(())
}
