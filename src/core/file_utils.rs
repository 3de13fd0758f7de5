//! File utilities for safe and robust file operations.
//!
//! Reading source files with UTF-8 validation, and replacing a file's
//! contents so that readers never observe it half-written.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::errors::{FnTagError, Result};

/// Source file reading with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file to string.
    ///
    /// Invalid UTF-8 is a parse error; the text is never converted lossily.
    pub fn read_to_string(file_path: &Path) -> Result<String> {
        let bytes = fs::read(file_path)
            .map_err(|e| FnTagError::io_at("Failed to read file", file_path, e))?;

        String::from_utf8(bytes).map_err(|e| {
            FnTagError::parse_with_location(
                "go",
                format!("file is not valid UTF-8: {}", e.utf8_error()),
                file_path.display().to_string(),
                None,
                None,
            )
        })
    }
}

/// Replaces a file through a temporary sibling and a backup sibling.
///
/// Sequence: write `<file><temp_suffix>`, rename `<file>` to
/// `<file><backup_suffix>`, rename the temporary into place, remove the
/// backup. A crash after the second rename leaves the backup behind.
#[derive(Debug, Clone)]
pub struct FileReplacer {
    temp_suffix: String,
    backup_suffix: String,
}

impl FileReplacer {
    /// Create a replacer using the given sibling suffixes
    pub fn new(temp_suffix: impl Into<String>, backup_suffix: impl Into<String>) -> Self {
        Self {
            temp_suffix: temp_suffix.into(),
            backup_suffix: backup_suffix.into(),
        }
    }

    /// Path of the temporary sibling for `path`
    pub fn temp_path(&self, path: &Path) -> PathBuf {
        with_suffix(path, &self.temp_suffix)
    }

    /// Path of the backup sibling for `path`
    pub fn backup_path(&self, path: &Path) -> PathBuf {
        with_suffix(path, &self.backup_suffix)
    }

    /// Replace the contents of `path` with `contents`
    pub fn replace(&self, path: &Path, contents: &str) -> Result<()> {
        let temp = self.temp_path(path);
        let backup = self.backup_path(path);

        let mut file = fs::File::create(&temp)
            .map_err(|e| FnTagError::io_at("Error creating file", &temp, e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| FnTagError::io_at("Error writing to file", &temp, e))?;
        file.sync_all()
            .map_err(|e| FnTagError::io_at("Error closing file", &temp, e))?;
        drop(file);
        debug!(path = %temp.display(), "wrote temporary file");

        fs::rename(path, &backup)
            .map_err(|e| FnTagError::io_at("Error renaming old file", path, e))?;
        fs::rename(&temp, path)
            .map_err(|e| FnTagError::io_at("Error renaming new file", &temp, e))?;
        debug!(path = %path.display(), "swapped in new file");

        fs::remove_file(&backup)
            .map_err(|e| FnTagError::io_at("Error deleting old file", &backup, e))?;

        Ok(())
    }
}

impl Default for FileReplacer {
    fn default() -> Self {
        Self::new(".new", ".old")
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_to_string() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.go");
        fs::write(&file, "package a\n").unwrap();

        assert_eq!(FileReader::read_to_string(&file).unwrap(), "package a\n");
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.go");
        fs::write(&file, [0x70, 0xff, 0xfe]).unwrap();

        let err = FileReader::read_to_string(&file).unwrap_err();
        assert!(matches!(err, FnTagError::Parse { .. }));
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileReader::read_to_string(&temp_dir.path().join("missing.go")).unwrap_err();
        assert!(matches!(err, FnTagError::Io { .. }));
    }

    #[test]
    fn test_sibling_paths() {
        let replacer = FileReplacer::default();
        let path = Path::new("pkg/a.go");
        assert_eq!(replacer.temp_path(path), PathBuf::from("pkg/a.go.new"));
        assert_eq!(replacer.backup_path(path), PathBuf::from("pkg/a.go.old"));
    }

    #[test]
    fn test_replace_leaves_no_siblings() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.go");
        fs::write(&file, "old contents").unwrap();

        let replacer = FileReplacer::default();
        replacer.replace(&file, "new contents").unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "new contents");
        assert!(!replacer.temp_path(&file).exists());
        assert!(!replacer.backup_path(&file).exists());
    }

    #[test]
    fn test_replace_missing_original_fails_before_touching_it() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("gone.go");

        let err = FileReplacer::default().replace(&file, "x").unwrap_err();
        assert!(err.to_string().contains("Error renaming old file"));
        assert!(!file.exists());
    }
}
