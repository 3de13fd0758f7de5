//! Writes corrected source units back to disk.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, info};

use super::patch::{Edit, TextPatcher};
use crate::core::config::TagCheckConfig;
use crate::core::errors::{FnTagError, Result};
use crate::core::file_utils::FileReplacer;
use crate::lang::common::SourceUnit;
use crate::lang::go::GoAdapter;

/// Applies edit lists to source units and replaces the files on disk
pub struct Rewriter {
    adapter: GoAdapter,
    replacer: FileReplacer,
}

impl Rewriter {
    /// Create a rewriter for the given configuration
    pub fn new(config: &TagCheckConfig) -> Result<Self> {
        Ok(Self {
            adapter: GoAdapter::with_tag_variable(config.tag_variable.clone())?,
            replacer: FileReplacer::new(config.temp_suffix.clone(), config.backup_suffix.clone()),
        })
    }

    /// Rewrite every unit with at least one edit, in unit order.
    ///
    /// Stops at the first failure; files already replaced stay replaced.
    pub fn rewrite(&mut self, units: &[SourceUnit], edits: &[Edit]) -> Result<Vec<PathBuf>> {
        let mut by_unit: BTreeMap<usize, Vec<&Edit>> = BTreeMap::new();
        for edit in edits {
            by_unit.entry(edit.unit).or_default().push(edit);
        }

        let mut rewritten = Vec::with_capacity(by_unit.len());
        for (index, unit_edits) in by_unit {
            let unit = units.get(index).ok_or_else(|| {
                FnTagError::internal(format!("edit refers to unknown source unit {index}"))
            })?;

            let patched = TextPatcher::apply(&unit.source, unit_edits.iter().copied())
                .map_err(|e| e.with_context(format!("patching {}", unit.display_path)))?;
            if patched == unit.source {
                debug!(file = %unit.display_path, "edits left file unchanged");
                continue;
            }

            self.adapter.parse_tree(&patched, &unit.display_path)?;
            self.replacer.replace(&unit.path, &patched)?;

            info!(
                file = %unit.display_path,
                corrections = unit_edits.len(),
                "rewrote fn tags"
            );
            rewritten.push(unit.path.clone());
        }

        Ok(rewritten)
    }
}
