//! Merge numbered chunk files back into one document

use crate::config::{file_name, parent_dir, MergeOptions};
use crate::error::{EngineError, Result};
use crate::numbered::numbered_files;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of merging one folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Merged output file
    pub output: PathBuf,
    /// Numbered files found in the folder
    pub files_found: usize,
    /// Files that contributed content
    pub files_merged: usize,
    /// Files that could not be read
    pub unreadable: Vec<PathBuf>,
    /// Characters in the merged output
    pub total_chars: usize,
}

/// Default merge output for `dir`: `<dir parent>/<dir name>_merged.txt`
pub fn default_merge_output(dir: &Path) -> PathBuf {
    let name = file_name(dir, "chunks");
    parent_dir(dir).join(format!("{name}_merged.txt"))
}

/// Merge the numbered files of `dir` in numeric order
///
/// Every file is trimmed before joining and empty files are skipped. Files
/// that cannot be read are logged and skipped rather than failing the merge.
pub fn merge_folder(dir: &Path, options: &MergeOptions) -> Result<MergeReport> {
    let files = numbered_files(dir)?;
    if files.is_empty() {
        return Err(EngineError::NoNumberedFiles(dir.to_path_buf()));
    }

    let mut parts = Vec::with_capacity(files.len());
    let mut unreadable = Vec::new();

    for (number, path) in &files {
        match fs::read_to_string(path) {
            Ok(content) => {
                let content = content.trim();
                if content.is_empty() {
                    debug!("Skipping empty chunk {}", number);
                } else {
                    parts.push(content.to_string());
                }
            }
            Err(e) => {
                warn!("Skipping unreadable chunk {}: {}", path.display(), e);
                unreadable.push(path.clone());
            }
        }
    }

    if parts.is_empty() {
        return Err(EngineError::NoContent(dir.to_path_buf()));
    }

    let merged = parts.join(&options.separator);
    let total_chars = merged.chars().count();

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_merge_output(dir));
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| EngineError::io(parent, e))?;
    }
    fs::write(&output, &merged).map_err(|e| EngineError::io(&output, e))?;

    info!(
        "Merged {} of {} files into {} ({} chars)",
        parts.len(),
        files.len(),
        output.display(),
        total_chars
    );

    Ok(MergeReport {
        output,
        files_found: files.len(),
        files_merged: parts.len(),
        unreadable,
        total_chars,
    })
}
