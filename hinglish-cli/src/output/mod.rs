//! Output formatting module

use anyhow::Result;
use hinglish_engine::{FileTranslation, FolderTranslation, MergeReport, SplitReport, WorkflowReport};
use serde::Serialize;
use std::path::PathBuf;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single command report
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary
    #[default]
    Text,
    /// JSON document per report
    Json,
}

impl OutputFormat {
    /// Formatter writing to stdout
    pub fn stdout_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(std::io::stdout())),
        }
    }
}

/// An input that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedInput {
    /// Input path
    pub input: PathBuf,
    /// Error message
    pub error: String,
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    /// Files split into numbered chunks
    Split {
        /// Successful splits
        files: Vec<SplitReport>,
        /// Inputs that failed
        failures: Vec<FailedInput>,
    },
    /// Chunk folder merged into one file
    Merge(MergeReport),
    /// Inline text translated
    Text {
        /// Text as given
        original: String,
        /// Hinglish rendering
        hinglish: String,
    },
    /// Single file translated
    File(FileTranslation),
    /// Folder of numbered chunks translated
    Folder(FolderTranslation),
    /// Split, translate and merge
    Workflow(WorkflowReport),
}
