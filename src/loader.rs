//! Loading result files into a single record sequence
//!
//! Input is an explicit ordered list of paths, or a directory scanned for
//! `.json` entries ordered by file name. Each file holds a JSON array of
//! records; arrays are concatenated in path order. Any read or parse
//! failure propagates with the offending path attached.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::record::BuildRecord;

/// Errors that can occur while gathering and parsing result files
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to scan directory {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no .json files found in {path}")]
    EmptyScan { path: PathBuf },
}

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Collect the `.json` files of a directory, ordered by file name.
///
/// Name order keeps multi-file runs deterministic: producers write
/// `result-<run>-<batch>.json` and the batch suffix sorts the batches.
pub fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| LoaderError::Scan {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoaderError::Scan {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") && path.is_file() {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(LoaderError::EmptyScan {
            path: dir.to_path_buf(),
        });
    }

    paths.sort();
    Ok(paths)
}

/// Load one file's JSON array of records.
pub fn load_file(path: &Path) -> Result<Vec<BuildRecord>> {
    let text = fs::read_to_string(path).map_err(|source| LoaderError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| LoaderError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every file and concatenate the record arrays in path order.
pub fn load_files(paths: &[PathBuf]) -> Result<Vec<BuildRecord>> {
    let mut records = Vec::new();
    for path in paths {
        let batch = load_file(path)?;
        tracing::debug!(path = %path.display(), records = batch.len(), "loaded result file");
        records.extend(batch);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_file_parses_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "result-0.json",
            r#"[{"Success": true, "Time": 0.5}, {"Success": false, "Time": 10.0}]"#,
        );

        let records = load_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].success);
        assert_eq!(records[1].time, 10.0);
    }

    #[test]
    fn test_load_file_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LoaderError::Read { .. }));
    }

    #[test]
    fn test_load_file_invalid_json_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "broken.json", "not json");
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoaderError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_load_files_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.json", r#"[{"Success": true, "Time": 0.1}]"#);
        let b = write_file(dir.path(), "b.json", r#"[{"Success": true, "Time": 0.2}]"#);

        let records = load_files(&[a, b]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].time, 0.1);
        assert_eq!(records[1].time, 0.2);
    }

    #[test]
    fn test_load_files_propagates_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.json", r#"[]"#);
        let missing = dir.path().join("missing.json");

        let err = load_files(&[a, missing]).unwrap_err();
        assert!(matches!(err, LoaderError::Read { .. }));
    }

    #[test]
    fn test_scan_dir_orders_by_name() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "result-2.json", "[]");
        write_file(dir.path(), "result-0.json", "[]");
        write_file(dir.path(), "result-1.json", "[]");
        write_file(dir.path(), "notes.txt", "ignored");

        let paths = scan_dir(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["result-0.json", "result-1.json", "result-2.json"]);
    }

    #[test]
    fn test_scan_dir_empty_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "notes.txt", "no json here");
        let err = scan_dir(dir.path()).unwrap_err();
        assert!(matches!(err, LoaderError::EmptyScan { .. }));
    }

    #[test]
    fn test_scan_dir_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan_dir(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, LoaderError::Scan { .. }));
    }
}
