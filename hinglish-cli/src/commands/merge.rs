//! Merge command implementation

use anyhow::{Context, Result};
use clap::Args;
use hinglish_engine::merge_folder;
use std::path::PathBuf;

use super::RunContext;
use crate::output::{OutputFormat, Report};

/// Arguments for the merge command
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Folder holding 1.txt, 2.txt, ...
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Output file (default: <dir>_merged.txt beside the folder)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Separator between chunks; `\n` and `\t` are unescaped
    #[arg(short, long, value_name = "SEPARATOR")]
    pub separator: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl MergeArgs {
    /// Execute the merge command
    pub fn execute(&self, ctx: &RunContext) -> Result<()> {
        let mut options = ctx.config.merge_options();
        if let Some(output) = &self.output {
            options = options.with_output(output);
        }
        if let Some(separator) = &self.separator {
            options = options.with_separator(unescape_separator(separator));
        }

        log::info!("Merging chunks from {}", self.dir.display());
        let report = merge_folder(&self.dir, &options)
            .with_context(|| format!("Failed to merge {}", self.dir.display()))?;

        let mut formatter = self.format.stdout_formatter();
        formatter.format_report(&Report::Merge(report))?;
        formatter.finish()
    }
}

/// Turn the escape sequences a shell passes literally into real characters
pub fn unescape_separator(raw: &str) -> String {
    raw.replace("\\n", "\n").replace("\\t", "\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unescape_separator() {
        assert_eq!(unescape_separator("\\n\\n"), "\n\n");
        assert_eq!(unescape_separator(" | "), " | ");
        assert_eq!(unescape_separator("\\t-"), "\t-");
    }

    #[test]
    fn test_execute_with_separator() {
        let dir = TempDir::new().unwrap();
        let chunks = dir.path().join("story");
        fs::create_dir(&chunks).unwrap();
        fs::write(chunks.join("1.txt"), "one").unwrap();
        fs::write(chunks.join("2.txt"), "two").unwrap();
        let output = dir.path().join("joined.txt");

        let args = MergeArgs {
            dir: chunks,
            output: Some(output.clone()),
            separator: Some("\\n---\\n".to_string()),
            format: OutputFormat::Json,
        };
        args.execute(&RunContext::default()).unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "one\n---\ntwo");
    }

    #[test]
    fn test_execute_missing_folder() {
        let dir = TempDir::new().unwrap();
        let args = MergeArgs {
            dir: dir.path().join("missing"),
            output: None,
            separator: None,
            format: OutputFormat::Text,
        };

        let err = args.execute(&RunContext::default()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to merge"));
    }
}
