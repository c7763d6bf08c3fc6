//! Split text files into numbered chunk files

use crate::config::SplitOptions;
use crate::error::{EngineError, Result};
use crate::numbered::{chunk_file_name, clear_numbered_files};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of splitting one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// File that was split
    pub input: PathBuf,
    /// Folder holding the chunk files
    pub output_folder: PathBuf,
    /// Chunk files in order
    pub files: Vec<PathBuf>,
    /// Characters in the input file
    pub total_chars: usize,
}

impl SplitReport {
    /// Number of chunk files written
    pub fn files_created(&self) -> usize {
        self.files.len()
    }
}

/// Split `input` into `1.txt`, `2.txt`, ... under the configured folder
///
/// Numbered files left in the folder by an earlier run are removed first so
/// a later merge only sees this run's chunks.
pub fn split_file(input: &Path, options: &SplitOptions) -> Result<SplitReport> {
    let chunker = options.chunker()?;

    if !input.exists() {
        return Err(EngineError::FileNotFound(input.to_path_buf()));
    }
    if !input.is_file() {
        return Err(EngineError::NotAFile(input.to_path_buf()));
    }

    let text = fs::read_to_string(input).map_err(|e| EngineError::io(input, e))?;
    let total_chars = text.chars().count();

    if total_chars > options.max_input_chars {
        return Err(EngineError::InputTooLarge {
            path: input.to_path_buf(),
            chars: total_chars,
            limit: options.max_input_chars,
        });
    }
    if text.trim().is_empty() {
        return Err(EngineError::EmptyInput(input.to_path_buf()));
    }

    let output_folder = options.output_folder_for(input);
    fs::create_dir_all(&output_folder).map_err(|e| EngineError::io(&output_folder, e))?;
    clear_numbered_files(&output_folder)?;

    let chunks = chunker.chunk(&text);
    debug!(
        "Split {} ({} chars) into {} chunks of at most {} chars",
        input.display(),
        total_chars,
        chunks.len(),
        chunker.max_chars()
    );

    let mut files = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let path = output_folder.join(chunk_file_name(i as u64 + 1));
        fs::write(&path, &chunk.text).map_err(|e| EngineError::io(&path, e))?;
        files.push(path);
    }

    info!(
        "Created {} chunk files in {}",
        files.len(),
        output_folder.display()
    );

    Ok(SplitReport {
        input: input.to_path_buf(),
        output_folder,
        files,
        total_chars,
    })
}

/// Split several files in parallel, each into its own folder
///
/// Results are returned in input order. A fixed `folder_name` would make the
/// files overwrite each other, so with more than one input every file uses
/// its own stem. An input whose folder is already claimed by an earlier input
/// (same stem, same base directory) fails with
/// [`EngineError::OutputFolderConflict`] and is not split.
pub fn split_files(inputs: &[PathBuf], options: &SplitOptions) -> Result<Vec<Result<SplitReport>>> {
    split_files_with_progress(inputs, options, |_| {})
}

/// [`split_files`] calling `on_file(input)` as each file finishes
pub fn split_files_with_progress<F>(
    inputs: &[PathBuf],
    options: &SplitOptions,
    on_file: F,
) -> Result<Vec<Result<SplitReport>>>
where
    F: Fn(&Path) + Sync,
{
    let mut options = options.clone();
    if inputs.len() > 1 && options.folder_name.take().is_some() {
        warn!("Ignoring folder name for {} inputs; using file stems", inputs.len());
    }

    let mut claimed = HashSet::new();
    let conflicts: Vec<Option<PathBuf>> = inputs
        .iter()
        .map(|input| {
            let folder = options.output_folder_for(input);
            if claimed.insert(folder.clone()) {
                None
            } else {
                Some(folder)
            }
        })
        .collect();

    let threads = options.threads.unwrap_or_else(num_cpus::get).max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| EngineError::Config(format!("failed to build thread pool: {e}")))?;

    debug!("Splitting {} files on {} threads", inputs.len(), threads);

    Ok(pool.install(|| {
        inputs
            .par_iter()
            .zip(conflicts.par_iter())
            .map(|(input, conflict)| {
                let result = match conflict {
                    Some(folder) => Err(EngineError::OutputFolderConflict {
                        input: input.clone(),
                        folder: folder.clone(),
                    }),
                    None => split_file(input, &options),
                };
                on_file(input);
                result
            })
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_split_writes_numbered_files() {
        let dir = TempDir::new().unwrap();
        let input = write(&dir, "story.txt", "One two three. Four five six. Seven eight.");
        let options = SplitOptions::default().with_max_chars(15);

        let report = split_file(&input, &options).unwrap();

        assert_eq!(report.output_folder, dir.path().join("output").join("story"));
        assert_eq!(report.files_created(), 3);
        assert_eq!(report.total_chars, 42);
        assert_eq!(
            fs::read_to_string(report.output_folder.join("1.txt")).unwrap(),
            "One two three."
        );
        assert_eq!(
            fs::read_to_string(report.output_folder.join("3.txt")).unwrap(),
            "Seven eight."
        );
    }

    #[test]
    fn test_split_errors() {
        let dir = TempDir::new().unwrap();
        let options = SplitOptions::default();

        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            split_file(&missing, &options),
            Err(EngineError::FileNotFound(_))
        ));

        assert!(matches!(
            split_file(dir.path(), &options),
            Err(EngineError::NotAFile(_))
        ));

        let empty = write(&dir, "empty.txt", "");
        assert!(matches!(
            split_file(&empty, &options),
            Err(EngineError::EmptyInput(_))
        ));

        let blank = write(&dir, "blank.txt", "  \n\t ");
        assert!(matches!(
            split_file(&blank, &options),
            Err(EngineError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_split_rejects_oversized_input() {
        let dir = TempDir::new().unwrap();
        let input = write(&dir, "big.txt", &"a".repeat(101));
        let options = SplitOptions {
            max_input_chars: 100,
            ..Default::default()
        };

        match split_file(&input, &options) {
            Err(EngineError::InputTooLarge { chars, limit, .. }) => {
                assert_eq!(chars, 101);
                assert_eq!(limit, 100);
            }
            other => panic!("expected InputTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_split_rejects_zero_chunk_size() {
        let dir = TempDir::new().unwrap();
        let input = write(&dir, "story.txt", "text");
        let options = SplitOptions::default().with_max_chars(0);

        assert!(matches!(
            split_file(&input, &options),
            Err(EngineError::Core(_))
        ));
    }

    #[test]
    fn test_split_clears_stale_chunks() {
        let dir = TempDir::new().unwrap();
        let input = write(&dir, "story.txt", "aaaa bbbb cccc dddd");
        let options = SplitOptions::default().with_max_chars(5);
        let first = split_file(&input, &options).unwrap();
        assert_eq!(first.files_created(), 4);

        fs::write(&input, "short").unwrap();
        let second = split_file(&input, &options).unwrap();

        assert_eq!(second.files_created(), 1);
        assert!(!second.output_folder.join("2.txt").exists());
    }

    #[test]
    fn test_split_files_keeps_input_order() {
        let dir = TempDir::new().unwrap();
        let inputs = vec![
            write(&dir, "a.txt", "First file. It has text."),
            dir.path().join("missing.txt"),
            write(&dir, "c.txt", "Third file."),
        ];
        let options = SplitOptions {
            threads: Some(2),
            folder_name: Some("shared".to_string()),
            ..Default::default()
        };

        let results = split_files(&inputs, &options).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap().output_folder,
            dir.path().join("output").join("a")
        );
        assert!(matches!(results[1], Err(EngineError::FileNotFound(_))));
        assert_eq!(
            results[2].as_ref().unwrap().output_folder,
            dir.path().join("output").join("c")
        );
    }

    #[test]
    fn test_split_files_rejects_shared_output_folder() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        let first = dir.path().join("a").join("story.txt");
        let second = dir.path().join("b").join("story.txt");
        fs::write(&first, "One here. Two here. Six here.").unwrap();
        fs::write(&second, "Beta.").unwrap();
        let out = dir.path().join("out");
        let options = SplitOptions {
            max_chars: 10,
            threads: Some(2),
            ..Default::default()
        }
        .with_output_dir(&out);

        let results = split_files(&[first, second.clone()], &options).unwrap();

        let report = results[0].as_ref().unwrap();
        assert_eq!(report.output_folder, out.join("story"));
        assert_eq!(report.files_created(), 3);
        assert!(report.files.iter().all(|f| f.exists()));
        assert_eq!(
            fs::read_to_string(out.join("story").join("1.txt")).unwrap(),
            "One here."
        );
        match &results[1] {
            Err(EngineError::OutputFolderConflict { input, folder }) => {
                assert_eq!(input, &second);
                assert_eq!(folder, &out.join("story"));
            }
            other => panic!("expected a folder conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_split_files_reports_each_file() {
        let dir = TempDir::new().unwrap();
        let inputs = vec![
            write(&dir, "a.txt", "Alpha."),
            write(&dir, "b.txt", "Beta."),
        ];
        let seen = std::sync::Mutex::new(Vec::new());

        split_files_with_progress(&inputs, &SplitOptions::default(), |input| {
            seen.lock().unwrap().push(input.to_path_buf());
        })
        .unwrap();

        let mut seen = seen.into_inner().unwrap();
        seen.sort();
        assert_eq!(seen, inputs);
    }
}
