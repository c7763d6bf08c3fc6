//! Split, translate and merge a document end to end

use crate::config::{file_stem, parent_dir, MergeOptions, WorkflowOptions};
use crate::error::Result;
use crate::file_translator::{translate_folder_with_progress, FolderTranslation};
use crate::merger::{merge_folder, MergeReport};
use crate::pipeline::HinglishPipeline;
use crate::splitter::{split_file, SplitReport};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of a full workflow run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowReport {
    /// Split stage
    pub split: SplitReport,
    /// Translation stage
    pub translation: FolderTranslation,
    /// Merge stage
    pub merge: MergeReport,
}

impl WorkflowReport {
    /// Chunks translated successfully
    pub fn translated_count(&self) -> usize {
        self.translation.translated
    }

    /// Chunks that failed to translate
    pub fn failed_count(&self) -> usize {
        self.translation.failed()
    }

    /// Final merged file
    pub fn output(&self) -> &Path {
        &self.merge.output
    }
}

/// Default final output: `<input stem>_complete_hinglish.txt` beside the input
pub fn default_workflow_output(input: &Path) -> PathBuf {
    let stem = file_stem(input, "document");
    parent_dir(input).join(format!("{stem}_complete_hinglish.txt"))
}

/// Split `input`, translate every chunk and merge the translations
pub async fn run_workflow(
    pipeline: &HinglishPipeline,
    input: &Path,
    options: &WorkflowOptions,
) -> Result<WorkflowReport> {
    run_workflow_with_progress(pipeline, input, options, |_, _| {}).await
}

/// [`run_workflow`] calling `on_chunk(done, total)` during translation
pub async fn run_workflow_with_progress<F>(
    pipeline: &HinglishPipeline,
    input: &Path,
    options: &WorkflowOptions,
    on_chunk: F,
) -> Result<WorkflowReport>
where
    F: FnMut(usize, usize) + Send,
{
    info!("Step 1/3: splitting {}", input.display());
    let split = split_file(input, &options.split)?;

    info!(
        "Step 2/3: translating {} chunks",
        split.files_created()
    );
    let translation = translate_folder_with_progress(
        pipeline,
        &split.output_folder,
        options.translated_dir.as_deref(),
        on_chunk,
    )
    .await?;

    info!("Step 3/3: merging translated chunks");
    let merge_options = MergeOptions {
        output: Some(
            options
                .output
                .clone()
                .unwrap_or_else(|| default_workflow_output(input)),
        ),
        separator: options.separator.clone(),
    };
    let merge = merge_folder(&translation.output_dir, &merge_options)?;

    info!(
        "Workflow complete: {} chunks, {} translated, {} failed, output {}",
        split.files_created(),
        translation.translated,
        translation.failed(),
        merge.output.display()
    );

    Ok(WorkflowReport {
        split,
        translation,
        merge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_workflow_output() {
        assert_eq!(
            default_workflow_output(Path::new("/books/story.txt")),
            PathBuf::from("/books/story_complete_hinglish.txt")
        );
        assert_eq!(
            default_workflow_output(Path::new("story.txt")),
            PathBuf::from("story_complete_hinglish.txt")
        );
    }
}
