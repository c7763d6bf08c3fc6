//! Translate files and folders of numbered chunks

use crate::config::{file_name, file_stem, parent_dir};
use crate::error::{EngineError, Result};
use crate::numbered::{chunk_file_name, clear_numbered_files, numbered_files, same_dir};
use crate::pipeline::HinglishPipeline;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of translating one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTranslation {
    /// Source file
    pub input: PathBuf,
    /// Written Hinglish file
    pub output: PathBuf,
    /// Characters read
    pub input_chars: usize,
    /// Characters written
    pub output_chars: usize,
}

/// A chunk file that could not be translated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkFailure {
    /// Chunk file
    pub file: PathBuf,
    /// Why it failed
    pub reason: String,
}

/// Result of translating a folder of numbered chunks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderTranslation {
    /// Folder holding the translated chunks
    pub output_dir: PathBuf,
    /// Chunk files written
    pub translated: usize,
    /// Chunk files with no text to translate
    pub skipped: usize,
    /// Chunk files that failed
    pub failures: Vec<ChunkFailure>,
    /// Characters written across all translated chunks
    pub total_chars: usize,
}

impl FolderTranslation {
    /// Number of failed chunk files
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Output file name for `input`: `<stem>_hinglish.<ext>`, or `<name>_hinglish`
pub fn hinglish_file_name(input: &Path) -> String {
    let stem = file_stem(input, "document");
    match input.extension() {
        Some(ext) => format!("{stem}_hinglish.{}", ext.to_string_lossy()),
        None => format!("{stem}_hinglish"),
    }
}

/// Default sibling folder for translated chunks: `<dir>_translated`
pub fn default_translated_dir(dir: &Path) -> PathBuf {
    let name = file_name(dir, "chunks");
    parent_dir(dir).join(format!("{name}_translated"))
}

/// Translate `input` into `output_dir` (default: beside the input)
pub async fn translate_file(
    pipeline: &HinglishPipeline,
    input: &Path,
    output_dir: Option<&Path>,
) -> Result<FileTranslation> {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => parent_dir(input),
    };
    let output = dir.join(hinglish_file_name(input));
    translate_file_to(pipeline, input, &output).await
}

/// Translate `input` into the file `output`
pub async fn translate_file_to(
    pipeline: &HinglishPipeline,
    input: &Path,
    output: &Path,
) -> Result<FileTranslation> {
    if !input.exists() {
        return Err(EngineError::FileNotFound(input.to_path_buf()));
    }
    if !input.is_file() {
        return Err(EngineError::NotAFile(input.to_path_buf()));
    }

    let text = fs::read_to_string(input).map_err(|e| EngineError::io(input, e))?;
    let input_chars = text.chars().count();
    info!("Translating {} ({} chars)", input.display(), input_chars);

    let hinglish = pipeline.to_hinglish(&text).await?;
    if hinglish.is_empty() {
        warn!("{} produced no translated text", input.display());
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| EngineError::io(parent, e))?;
    }
    fs::write(output, &hinglish).map_err(|e| EngineError::io(output, e))?;
    info!("Saved translation to {}", output.display());

    Ok(FileTranslation {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        input_chars,
        output_chars: hinglish.chars().count(),
    })
}

/// Translate every numbered chunk of `dir` into the same number in `output_dir`
///
/// See [`translate_folder_with_progress`].
pub async fn translate_folder(
    pipeline: &HinglishPipeline,
    dir: &Path,
    output_dir: Option<&Path>,
) -> Result<FolderTranslation> {
    translate_folder_with_progress(pipeline, dir, output_dir, |_, _| {}).await
}

/// Translate a chunk folder, calling `on_chunk(done, total)` after each file
///
/// Each translation keeps its source file name, so `01.txt` and `1.txt` stay
/// distinct. `output_dir` must not be `dir` itself.
///
/// A chunk that fails to translate is logged and recorded in the report but
/// does not stop the remaining chunks. Failed and empty chunks produce no
/// output file.
pub async fn translate_folder_with_progress<F>(
    pipeline: &HinglishPipeline,
    dir: &Path,
    output_dir: Option<&Path>,
    mut on_chunk: F,
) -> Result<FolderTranslation>
where
    F: FnMut(usize, usize) + Send,
{
    let files = numbered_files(dir)?;
    if files.is_empty() {
        return Err(EngineError::NoNumberedFiles(dir.to_path_buf()));
    }

    let output_dir = match output_dir {
        Some(out) => out.to_path_buf(),
        None => default_translated_dir(dir),
    };
    if same_dir(dir, &output_dir) {
        return Err(EngineError::OutputIsSource(output_dir));
    }
    fs::create_dir_all(&output_dir).map_err(|e| EngineError::io(&output_dir, e))?;
    clear_numbered_files(&output_dir)?;

    let total = files.len();
    let mut report = FolderTranslation {
        output_dir: output_dir.clone(),
        ..Default::default()
    };

    for (i, (number, path)) in files.iter().enumerate() {
        match translate_chunk(pipeline, path).await {
            Ok(Some(hinglish)) => {
                let target = output_dir.join(file_name(path, &chunk_file_name(*number)));
                fs::write(&target, &hinglish).map_err(|e| EngineError::io(&target, e))?;
                report.translated += 1;
                report.total_chars += hinglish.chars().count();
            }
            Ok(None) => {
                debug!("Skipping empty chunk {}", path.display());
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Translation failed for chunk {}: {}", path.display(), e);
                report.failures.push(ChunkFailure {
                    file: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
        on_chunk(i + 1, total);
    }

    info!(
        "Translated {} of {} chunks into {} ({} failed)",
        report.translated,
        total,
        output_dir.display(),
        report.failed()
    );

    Ok(report)
}

async fn translate_chunk(pipeline: &HinglishPipeline, path: &Path) -> Result<Option<String>> {
    let text = fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let hinglish = pipeline.to_hinglish(text).await?;
    Ok(Some(hinglish).filter(|h| !h.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hinglish_file_name() {
        assert_eq!(hinglish_file_name(Path::new("story.txt")), "story_hinglish.txt");
        assert_eq!(
            hinglish_file_name(Path::new("/a/b/notes.v2.md")),
            "notes.v2_hinglish.md"
        );
        assert_eq!(hinglish_file_name(Path::new("README")), "README_hinglish");
    }

    #[test]
    fn test_default_translated_dir() {
        assert_eq!(
            default_translated_dir(Path::new("/data/output/story")),
            PathBuf::from("/data/output/story_translated")
        );
    }
}
