//! Source unit loading: one Go file, or every Go file directly inside a
//! directory.

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::common::SourceUnit;
use super::go::GoAdapter;
use crate::core::config::TagCheckConfig;
use crate::core::errors::{FnTagError, Result};
use crate::core::file_utils::FileReader;

/// Loads and parses the source units named by a path
pub struct SourceUnitLoader {
    adapter: GoAdapter,
    extension: String,
}

impl SourceUnitLoader {
    /// Create a loader for the given configuration
    pub fn new(config: &TagCheckConfig) -> Result<Self> {
        Ok(Self {
            adapter: GoAdapter::with_tag_variable(config.tag_variable.clone())?,
            extension: config.source_extension.clone(),
        })
    }

    /// Load a single file, or every matching file of a directory (non-recursive).
    pub fn load(&mut self, path: &Path) -> Result<Vec<SourceUnit>> {
        let metadata = std::fs::metadata(path)
            .map_err(|e| FnTagError::io_at("Failed to stat file or dir", path, e))?;

        if metadata.is_dir() {
            let files = self.directory_files(path)?;
            debug!(dir = %path.display(), files = files.len(), "loading package directory");
            files.iter().map(|file| self.load_file(file)).collect()
        } else {
            Ok(vec![self.load_file(path)?])
        }
    }

    fn directory_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                FnTagError::io_at("Failed to read directory", path, e.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|ext| ext.to_str()) == Some(self.extension.as_str()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn load_file(&mut self, path: &Path) -> Result<SourceUnit> {
        let source = FileReader::read_to_string(path)?;
        self.adapter
            .parse_unit(source, path.to_path_buf(), display_path(path))
    }
}

/// Lexically clean a path for display, prefixing relative paths with `./`.
pub fn display_path(path: &Path) -> String {
    let cleaned = clean_path(path);
    let text = cleaned.to_string_lossy().into_owned();
    if cleaned.is_absolute() || text.starts_with('.') {
        text
    } else {
        format!(".{}{}", std::path::MAIN_SEPARATOR, text)
    }
}

/// Remove `.` components and fold `..` against preceding normal components.
fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
