//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
///
/// Every pattern is expanded with glob; plain paths match themselves.
/// Directories are skipped, duplicates removed and the result sorted.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_glob_and_plain_path() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "notes.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let plain = dir.path().join("a.txt").display().to_string();
        let files = resolve_patterns(&[pattern, plain]).unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_no_matches() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.txt", dir.path().display());

        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().starts_with("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file pattern: [");
    }
}
