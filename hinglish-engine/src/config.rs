//! Configuration types for the engine

use crate::error::{EngineError, Result};
use hinglish_core::{Chunker, DEFAULT_MAX_CHARS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public Google Translate endpoint
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Largest text the translation backend accepts in one request
pub const BACKEND_CHAR_LIMIT: usize = 5000;

/// Chunk size the pipeline uses before sending long text to the backend
pub const DEFAULT_PIPELINE_CHUNK_CHARS: usize = 4500;

/// Largest input file the splitter accepts, in characters
pub const DEFAULT_MAX_INPUT_CHARS: usize = 300_000;

/// Separator placed between merged chunk files
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// Translation backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Base URL of the backend
    pub endpoint: String,
    /// Source language code
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Skip TLS certificate verification (intercepting proxies only)
    pub accept_invalid_certs: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            source_lang: "en".to_string(),
            target_lang: "hi".to_string(),
            timeout_secs: 30,
            accept_invalid_certs: false,
        }
    }
}

impl TranslatorConfig {
    /// Point the translator at another endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(EngineError::Config("translator endpoint is empty".into()));
        }
        if self.source_lang.trim().is_empty() || self.target_lang.trim().is_empty() {
            return Err(EngineError::Config(
                "source and target languages must be set".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(EngineError::Config(
                "translator timeout must be at least 1 second".into(),
            ));
        }
        Ok(())
    }
}

/// Options for splitting a file into numbered chunk files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Maximum characters per chunk file
    pub max_chars: usize,
    /// Largest input file accepted, in characters
    pub max_input_chars: usize,
    /// Base directory for chunk folders (None = `<input parent>/output`)
    pub output_dir: Option<PathBuf>,
    /// Chunk folder name (None = input file stem)
    pub folder_name: Option<String>,
    /// Worker threads for multi-file splitting (None = CPU count)
    pub threads: Option<usize>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            output_dir: None,
            folder_name: None,
            threads: None,
        }
    }
}

impl SplitOptions {
    /// Set the chunk size
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Set the base output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the chunk folder name
    pub fn with_folder_name(mut self, name: impl Into<String>) -> Self {
        self.folder_name = Some(name.into());
        self
    }

    /// Build the chunker for these options
    pub fn chunker(&self) -> Result<Chunker> {
        Ok(Chunker::new(self.max_chars)?)
    }

    /// Folder the chunks of `input` are written to
    pub fn output_folder_for(&self, input: &Path) -> PathBuf {
        let base = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => parent_dir(input).join("output"),
        };
        let name = self
            .folder_name
            .clone()
            .unwrap_or_else(|| file_stem(input, "document"));
        base.join(name)
    }
}

/// Options for merging numbered chunk files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Output file (None = `<dir parent>/<dir name>_merged.txt`)
    pub output: Option<PathBuf>,
    /// Text inserted between chunks
    pub separator: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            output: None,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl MergeOptions {
    /// Set the output file
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Options for the split, translate, merge workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// How the input is split
    pub split: SplitOptions,
    /// Folder for translated chunks (None = `<chunk folder>_translated`)
    pub translated_dir: Option<PathBuf>,
    /// Final output file (None = `<input stem>_complete_hinglish.txt` beside the input)
    pub output: Option<PathBuf>,
    /// Separator used when merging translated chunks
    pub separator: String,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            split: SplitOptions::default(),
            translated_dir: None,
            output: None,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Parent directory of `path`, empty for a bare file name
pub(crate) fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// File stem of `path` as an owned string
pub(crate) fn file_stem(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Last component of `path` as an owned string
pub(crate) fn file_name(path: &Path, fallback: &str) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translator_defaults() {
        let config = TranslatorConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.source_lang, "en");
        assert_eq!(config.target_lang, "hi");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.accept_invalid_certs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_translator_validation() {
        let config = TranslatorConfig::default().with_endpoint("  ");
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));

        let config = TranslatorConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_translator_config_from_partial_json() {
        let config: TranslatorConfig =
            serde_json::from_str(r#"{"target_lang": "mr", "accept_invalid_certs": true}"#).unwrap();
        assert_eq!(config.target_lang, "mr");
        assert_eq!(config.source_lang, "en");
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn test_split_output_folder_defaults() {
        let options = SplitOptions::default();
        assert_eq!(options.max_chars, 2000);
        assert_eq!(options.max_input_chars, 300_000);
        assert_eq!(
            options.output_folder_for(Path::new("/data/story.txt")),
            PathBuf::from("/data/output/story")
        );
        assert_eq!(
            options.output_folder_for(Path::new("story.txt")),
            PathBuf::from("output/story")
        );
    }

    #[test]
    fn test_split_output_folder_overrides() {
        let options = SplitOptions::default()
            .with_output_dir("/tmp/chunks")
            .with_folder_name("part_one");
        assert_eq!(
            options.output_folder_for(Path::new("/data/story.txt")),
            PathBuf::from("/tmp/chunks/part_one")
        );
    }

    #[test]
    fn test_split_chunker_rejects_zero() {
        let options = SplitOptions::default().with_max_chars(0);
        assert!(matches!(options.chunker(), Err(EngineError::Core(_))));
    }

    #[test]
    fn test_merge_defaults() {
        let options = MergeOptions::default();
        assert_eq!(options.separator, "\n\n");
        assert!(options.output.is_none());
    }
}
