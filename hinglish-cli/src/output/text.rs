//! Plain text output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - human readable summaries
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        let w = &mut self.writer;
        match report {
            Report::Split { files, failures } => {
                for split in files {
                    writeln!(
                        w,
                        "✓ {} -> {} ({} files, {} chars)",
                        split.input.display(),
                        split.output_folder.display(),
                        split.files_created(),
                        split.total_chars
                    )?;
                }
                for failure in failures {
                    writeln!(w, "✗ {}: {}", failure.input.display(), failure.error)?;
                }
            }
            Report::Merge(merge) => {
                writeln!(
                    w,
                    "✓ Merged {} of {} files into {} ({} chars)",
                    merge.files_merged,
                    merge.files_found,
                    merge.output.display(),
                    merge.total_chars
                )?;
                for path in &merge.unreadable {
                    writeln!(w, "  skipped unreadable {}", path.display())?;
                }
            }
            // Inline translations print only the result
            Report::Text { hinglish, .. } => {
                writeln!(w, "{}", hinglish)?;
            }
            Report::File(file) => {
                writeln!(
                    w,
                    "✓ {} -> {} ({} chars)",
                    file.input.display(),
                    file.output.display(),
                    file.output_chars
                )?;
            }
            Report::Folder(folder) => {
                writeln!(
                    w,
                    "✓ Translated {} chunks into {} ({} skipped, {} failed)",
                    folder.translated,
                    folder.output_dir.display(),
                    folder.skipped,
                    folder.failed()
                )?;
                for failure in &folder.failures {
                    writeln!(w, "✗ {}: {}", failure.file.display(), failure.reason)?;
                }
            }
            Report::Workflow(workflow) => {
                writeln!(
                    w,
                    "✓ Split {} into {} chunks",
                    workflow.split.input.display(),
                    workflow.split.files_created()
                )?;
                writeln!(
                    w,
                    "✓ Translated {} chunks ({} failed)",
                    workflow.translated_count(),
                    workflow.failed_count()
                )?;
                for failure in &workflow.translation.failures {
                    writeln!(w, "✗ {}: {}", failure.file.display(), failure.reason)?;
                }
                writeln!(w, "✓ Hinglish output: {}", workflow.output().display())?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
