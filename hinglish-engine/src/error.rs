//! Engine error types
//!
//! Wraps [`CoreError`] and adds the file system and translation backend
//! failures that only exist once I/O is involved.

use hinglish_core::CoreError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory the operation was acting on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Input path does not exist
    #[error("input not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Input path exists but is not a regular file
    #[error("path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Input path exists but is not a directory
    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Input file holds no text
    #[error("input file is empty: {}", .0.display())]
    EmptyInput(PathBuf),

    /// Input file exceeds the splitter's size cap
    #[error("file too large: {chars} characters (max {limit}): {}", path.display())]
    InputTooLarge {
        /// Offending file
        path: PathBuf,
        /// Characters in the file
        chars: usize,
        /// Configured cap
        limit: usize,
    },

    /// Directory holds no `N.txt` files
    #[error("no numbered text files found in: {}", .0.display())]
    NoNumberedFiles(PathBuf),

    /// Every numbered file was empty or unreadable
    #[error("no content found in any of the numbered files in: {}", .0.display())]
    NoContent(PathBuf),

    /// Translated chunks would be written over the chunks being read
    #[error("output folder must differ from the chunk folder: {}", .0.display())]
    OutputIsSource(PathBuf),

    /// Another input in the same batch already writes to this folder
    #[error(
        "output folder {} is already used by another input: {}",
        folder.display(),
        input.display()
    )]
    OutputFolderConflict {
        /// Input that was not split
        input: PathBuf,
        /// Folder claimed by an earlier input
        folder: PathBuf,
    },

    /// Text exceeds what the translation backend accepts in one request
    #[error("text of {chars} characters exceeds the translator limit of {limit}")]
    InputTooLong {
        /// Characters in the text
        chars: usize,
        /// Backend limit
        limit: usize,
    },

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Translation backend answered with a non-success status
    #[error("translation backend returned status {status}: {body}")]
    Backend {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        body: String,
    },

    /// Translation backend answered with a body we could not interpret
    #[error("unexpected translation response: {0}")]
    UnexpectedResponse(String),

    /// Invalid engine configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        EngineError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
