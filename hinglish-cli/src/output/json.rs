//! JSON output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - one pretty-printed document per report
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hinglish_engine::FileTranslation;
    use serde_json::Value;
    use std::path::PathBuf;

    fn render(report: &Report) -> Value {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.format_report(report).unwrap();
        formatter.finish().unwrap();
        serde_json::from_slice(&formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_text_report_is_tagged() {
        let json = render(&Report::Text {
            original: "hello".into(),
            hinglish: "namaste".into(),
        });
        assert_eq!(json["command"], "text");
        assert_eq!(json["original"], "hello");
        assert_eq!(json["hinglish"], "namaste");
    }

    #[test]
    fn test_file_report_fields() {
        let json = render(&Report::File(FileTranslation {
            input: PathBuf::from("a.txt"),
            output: PathBuf::from("a_hinglish.txt"),
            input_chars: 5,
            output_chars: 7,
        }));
        assert_eq!(json["command"], "file");
        assert_eq!(json["output"], "a_hinglish.txt");
        assert_eq!(json["output_chars"], 7);
    }

    #[test]
    fn test_split_report_lists() {
        let json = render(&Report::Split {
            files: vec![],
            failures: vec![],
        });
        assert_eq!(json["command"], "split");
        assert!(json["files"].as_array().unwrap().is_empty());
    }
}
