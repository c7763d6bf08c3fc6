//! Numbered chunk file naming (`1.txt`, `2.txt`, ...)

use crate::error::{EngineError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name for the `number`-th chunk (1-based)
pub fn chunk_file_name(number: u64) -> String {
    format!("{number}.txt")
}

/// Parse a chunk number from a file name of the form `<digits>.txt`
pub fn parse_chunk_number(file_name: &str) -> Option<u64> {
    let digits = file_name.strip_suffix(".txt")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Numbered chunk files in `dir`, sorted by number
///
/// Files that do not match `<digits>.txt` are ignored. Ties (`01.txt` and
/// `1.txt`) are ordered by file name.
pub fn numbered_files(dir: &Path) -> Result<Vec<(u64, PathBuf)>> {
    if !dir.exists() {
        return Err(EngineError::FileNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(EngineError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| EngineError::io(dir, e))? {
        let entry = entry.map_err(|e| EngineError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let number = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(parse_chunk_number);
        if let Some(number) = number {
            files.push((number, path));
        }
    }

    files.sort();
    Ok(files)
}

/// Whether `a` and `b` name the same existing directory
pub(crate) fn same_dir(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Remove numbered chunk files left in `dir` by an earlier run
pub(crate) fn clear_numbered_files(dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }
    let stale = numbered_files(dir)?;
    for (_, path) in &stale {
        fs::remove_file(path).map_err(|e| EngineError::io(path, e))?;
    }
    if !stale.is_empty() {
        debug!("Removed {} stale chunk files from {}", stale.len(), dir.display());
    }
    Ok(stale.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_file_name() {
        assert_eq!(chunk_file_name(1), "1.txt");
        assert_eq!(chunk_file_name(42), "42.txt");
    }

    #[test]
    fn test_parse_chunk_number() {
        assert_eq!(parse_chunk_number("1.txt"), Some(1));
        assert_eq!(parse_chunk_number("010.txt"), Some(10));
        assert_eq!(parse_chunk_number(".txt"), None);
        assert_eq!(parse_chunk_number("1a.txt"), None);
        assert_eq!(parse_chunk_number("-1.txt"), None);
        assert_eq!(parse_chunk_number("1.md"), None);
        assert_eq!(parse_chunk_number("merged.txt"), None);
        assert_eq!(parse_chunk_number("99999999999999999999999.txt"), None);
    }

    #[test]
    fn test_same_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let sub = dir.path().join("story");
        fs::create_dir(&sub).unwrap();

        assert!(same_dir(&sub, &dir.path().join("story").join(".")));
        assert!(!same_dir(&sub, dir.path()));
        assert!(!same_dir(&sub, &dir.path().join("missing")));
    }
}
