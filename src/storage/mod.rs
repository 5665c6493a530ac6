use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

const DATA_DIR: &str = ".api-testgen";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory `{}`: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write file `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-project data directory, relative to the working directory.
pub fn data_dir() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(DATA_DIR)
}

/// Write text to `path`, creating missing parent directories.
pub fn save_text(path: &Path, contents: &str) -> Result<(), StorageError> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output file");
    Ok(())
}

pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string_pretty(value)?;
    save_text(path, &raw)
}

fn ensure_parent_dir(path: &Path) -> Result<(), StorageError> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_text_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/test_users.py");

        save_text(&path, "import requests\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "import requests\n");
    }

    #[test]
    fn save_json_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        save_json(&path, &serde_json::json!({ "cases": ["Test Case 1: a"] })).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"cases\""));
    }

    #[test]
    fn save_text_reports_unwritable_target() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file.
        let err = save_text(dir.path(), "x").unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
