//! File workflow and translation pipeline for the Hinglish toolkit
//!
//! Builds on `hinglish-core` and adds everything that touches the outside
//! world: splitting files into numbered chunk files, merging them back,
//! translating English through an HTTP backend, and the end to end
//! split, translate, merge workflow.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod file_translator;
pub mod merger;
pub mod numbered;
pub mod pipeline;
pub mod splitter;
pub mod translator;
pub mod workflow;

pub use config::{
    MergeOptions, SplitOptions, TranslatorConfig, WorkflowOptions, BACKEND_CHAR_LIMIT,
    DEFAULT_ENDPOINT, DEFAULT_MAX_INPUT_CHARS, DEFAULT_PIPELINE_CHUNK_CHARS, DEFAULT_SEPARATOR,
};
pub use error::{EngineError, Result};
pub use file_translator::{
    default_translated_dir, hinglish_file_name, translate_file, translate_file_to,
    translate_folder, translate_folder_with_progress, ChunkFailure, FileTranslation,
    FolderTranslation,
};
pub use merger::{default_merge_output, merge_folder, MergeReport};
pub use numbered::{chunk_file_name, numbered_files, parse_chunk_number};
pub use pipeline::{HinglishPipeline, TranslationOutcome};
pub use splitter::{split_file, split_files, split_files_with_progress, SplitReport};
pub use translator::{GoogleTranslator, Translator};
pub use workflow::{
    default_workflow_output, run_workflow, run_workflow_with_progress, WorkflowReport,
};

// Re-export from core for convenience
pub use hinglish_core::{Chunker, Scheme};
