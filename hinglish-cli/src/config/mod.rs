//! Configuration module

use anyhow::{Context, Result};
use hinglish_api::ServerConfig;
use hinglish_core::{validate_max_chars, Scheme, DEFAULT_MAX_CHARS};
use hinglish_engine::{
    GoogleTranslator, HinglishPipeline, MergeOptions, SplitOptions, TranslatorConfig,
    BACKEND_CHAR_LIMIT, DEFAULT_ENDPOINT, DEFAULT_MAX_INPUT_CHARS, DEFAULT_PIPELINE_CHUNK_CHARS,
    DEFAULT_SEPARATOR,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::CliError;

/// Chunk sizes above this are accepted but warned about
pub const LARGE_CHUNK_WARNING: usize = 10_000;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Splitting configuration
    #[serde(default)]
    pub splitter: SplitterConfig,

    /// Merging configuration
    #[serde(default)]
    pub merger: MergerConfig,

    /// Translation configuration
    #[serde(default)]
    pub translator: TranslatorSection,

    /// REST service configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Splitter-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Maximum characters per chunk file
    pub max_chars: i64,

    /// Largest input file accepted, in characters
    pub max_input_chars: usize,

    /// Base directory for chunk folders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS as i64,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            output_dir: None,
            threads: 0,
        }
    }
}

/// Merger-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MergerConfig {
    /// Text inserted between merged chunks
    pub separator: String,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Translation-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslatorSection {
    /// Base URL of the translation backend
    pub endpoint: String,

    /// Source language code
    pub source_lang: String,

    /// Target language code
    pub target_lang: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,

    /// Romanization scheme
    pub scheme: Scheme,

    /// Characters sent to the backend per request
    pub chunk_chars: usize,
}

impl Default for TranslatorSection {
    fn default() -> Self {
        let backend = TranslatorConfig::default();
        Self {
            endpoint: backend.endpoint,
            source_lang: backend.source_lang,
            target_lang: backend.target_lang,
            timeout_secs: backend.timeout_secs,
            accept_invalid_certs: backend.accept_invalid_certs,
            scheme: Scheme::default(),
            chunk_chars: DEFAULT_PIPELINE_CHUNK_CHARS,
        }
    }
}

impl TranslatorSection {
    /// Backend client configuration
    pub fn backend_config(&self) -> TranslatorConfig {
        TranslatorConfig {
            endpoint: self.endpoint.clone(),
            source_lang: self.source_lang.clone(),
            target_lang: self.target_lang.clone(),
            timeout_secs: self.timeout_secs,
            accept_invalid_certs: self.accept_invalid_certs,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                config.validate()?;
                log::info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Check every section for values the commands would reject
    pub fn validate(&self) -> Result<()> {
        validate_max_chars(self.splitter.max_chars)
            .map_err(|e| CliError::ConfigError(format!("[splitter] {e}")))?;
        if self.splitter.max_input_chars == 0 {
            return Err(
                CliError::ConfigError("[splitter] max_input_chars must be at least 1".into())
                    .into(),
            );
        }

        self.translator
            .backend_config()
            .validate()
            .map_err(|e| CliError::ConfigError(format!("[translator] {e}")))?;
        if self.translator.chunk_chars == 0 || self.translator.chunk_chars > BACKEND_CHAR_LIMIT {
            return Err(CliError::ConfigError(format!(
                "[translator] chunk_chars must be between 1 and {BACKEND_CHAR_LIMIT}, got {}",
                self.translator.chunk_chars
            ))
            .into());
        }

        if self.server.addr.trim().is_empty() {
            return Err(CliError::ConfigError("[server] addr is empty".into()).into());
        }
        if self.server.max_text_chars == 0 {
            return Err(
                CliError::ConfigError("[server] max_text_chars must be at least 1".into()).into(),
            );
        }

        Ok(())
    }

    /// Split options from the `[splitter]` section, with an optional chunk size override
    pub fn split_options(&self, max_chars: Option<i64>) -> Result<SplitOptions> {
        let max_chars = checked_chunk_size(max_chars.unwrap_or(self.splitter.max_chars))?;
        Ok(SplitOptions {
            max_chars,
            max_input_chars: self.splitter.max_input_chars,
            output_dir: self.splitter.output_dir.clone(),
            folder_name: None,
            threads: (self.splitter.threads > 0).then_some(self.splitter.threads),
        })
    }

    /// Merge options from the `[merger]` section
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions::default().with_separator(self.merger.separator.clone())
    }

    /// Build the translation pipeline from the `[translator]` section
    pub fn build_pipeline(&self) -> Result<HinglishPipeline> {
        let translator = GoogleTranslator::new(self.translator.backend_config())
            .context("Failed to create translation client")?;
        let pipeline = HinglishPipeline::new(Arc::new(translator))
            .with_scheme(self.translator.scheme)
            .with_chunk_chars(self.translator.chunk_chars)
            .context("Invalid translator chunk size")?;
        Ok(pipeline)
    }
}

/// Validate a signed chunk size, warning when it is unusually large
pub fn checked_chunk_size(value: i64) -> Result<usize> {
    let max_chars = validate_max_chars(value)?;
    if max_chars > LARGE_CHUNK_WARNING {
        log::warn!(
            "Chunk size {} is above {}; chunks this large may be rejected by the translator",
            max_chars,
            LARGE_CHUNK_WARNING
        );
    }
    Ok(max_chars)
}

/// Commented configuration template written by `generate-config`
pub fn template() -> String {
    format!(
        r#"# Hinglish toolkit configuration
#
# Every key is optional; missing keys fall back to the defaults shown here.
# Command-line flags override values from this file.

[splitter]
# Maximum characters per chunk file (must be at least 1)
max_chars = {max_chars}
# Largest input file accepted, in characters
max_input_chars = {max_input_chars}
# Base directory for chunk folders (default: <input dir>/output)
# output_dir = "output"
# Worker threads for multi-file splitting (0 = one per CPU)
threads = 0

[merger]
# Text placed between merged chunks
separator = "\n\n"

[translator]
# Translation backend
endpoint = "{endpoint}"
source_lang = "en"
target_lang = "hi"
timeout_secs = 30
# Only for intercepting proxies with private certificates
accept_invalid_certs = false
# Romanization scheme: "itrans" or "iast"
scheme = "itrans"
# Characters sent per backend request (at most {limit})
chunk_chars = {chunk_chars}

[server]
addr = "{addr}"
# Longest text accepted by POST /translate
max_text_chars = {max_text_chars}
"#,
        max_chars = DEFAULT_MAX_CHARS,
        max_input_chars = DEFAULT_MAX_INPUT_CHARS,
        endpoint = DEFAULT_ENDPOINT,
        limit = BACKEND_CHAR_LIMIT,
        chunk_chars = DEFAULT_PIPELINE_CHUNK_CHARS,
        addr = hinglish_api::DEFAULT_ADDR,
        max_text_chars = hinglish_api::DEFAULT_MAX_TEXT_CHARS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.splitter.max_chars, 2000);
        assert_eq!(config.splitter.max_input_chars, 300_000);
        assert_eq!(config.merger.separator, "\n\n");
        assert_eq!(config.translator.scheme, Scheme::Itrans);
        assert_eq!(config.translator.chunk_chars, 4500);
        assert_eq!(config.server.addr, "0.0.0.0:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_template_matches_defaults() {
        let config: CliConfig = toml::from_str(&template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config: CliConfig = toml::from_str(
            r#"
[splitter]
max_chars = 500

[translator]
scheme = "iast"
"#,
        )
        .unwrap();
        assert_eq!(config.splitter.max_chars, 500);
        assert_eq!(config.splitter.threads, 0);
        assert_eq!(config.translator.scheme, Scheme::Iast);
        assert_eq!(config.translator.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = CliConfig::default();
        config.splitter.max_chars = -1;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.translator.chunk_chars = BACKEND_CHAR_LIMIT + 1;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.translator.endpoint = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[translator]"));
    }

    #[test]
    fn test_unknown_scheme_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[translator]\nscheme = \"klingon\"\n").unwrap();

        let err = CliConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_split_options_override() {
        let mut config = CliConfig::default();
        config.splitter.threads = 3;

        let options = config.split_options(Some(100)).unwrap();
        assert_eq!(options.max_chars, 100);
        assert_eq!(options.threads, Some(3));

        let options = config.split_options(None).unwrap();
        assert_eq!(options.max_chars, 2000);

        assert!(config.split_options(Some(0)).is_err());
        assert!(config.split_options(Some(-5)).is_err());
    }

    #[test]
    fn test_large_chunk_size_is_accepted() {
        assert_eq!(checked_chunk_size(20_000).unwrap(), 20_000);
    }

    #[test]
    fn test_build_pipeline() {
        let mut config = CliConfig::default();
        config.translator.chunk_chars = 300;
        config.translator.scheme = Scheme::Iast;

        let pipeline = config.build_pipeline().unwrap();
        assert_eq!(pipeline.chunk_chars(), 300);
        assert_eq!(pipeline.scheme(), Scheme::Iast);
    }
}
