//! Run configuration for the fn tag checker.
//!
//! There is no configuration file: the CLI builds a [`TagCheckConfig`] from
//! its arguments and the library validates it before a session starts.

use crate::core::errors::{FnTagError, Result};

/// Configuration for one check (and optional rewrite) run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCheckConfig {
    /// Name of the local variable whose literal holds the tag
    pub tag_variable: String,
    /// Extension (without the dot) of source files picked up from a directory
    pub source_extension: String,
    /// Apply corrections to disk instead of only reporting them
    pub write: bool,
    /// Suffix of the temporary file the corrected text is written to
    pub temp_suffix: String,
    /// Suffix the original file is renamed to while it is replaced
    pub backup_suffix: String,
}

impl Default for TagCheckConfig {
    fn default() -> Self {
        Self {
            tag_variable: Self::default_tag_variable(),
            source_extension: "go".to_string(),
            write: false,
            temp_suffix: ".new".to_string(),
            backup_suffix: ".old".to_string(),
        }
    }
}

impl TagCheckConfig {
    fn default_tag_variable() -> String {
        "fn".to_string()
    }

    /// Enable or disable correction mode
    pub fn with_write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.tag_variable) {
            return Err(FnTagError::config_field(
                format!("'{}' is not a valid identifier", self.tag_variable),
                "tag_variable",
            ));
        }

        if self.source_extension.is_empty() || self.source_extension.starts_with('.') {
            return Err(FnTagError::config_field(
                "extension must be non-empty and given without a leading dot",
                "source_extension",
            ));
        }

        for (field, suffix) in [
            ("temp_suffix", &self.temp_suffix),
            ("backup_suffix", &self.backup_suffix),
        ] {
            if suffix.is_empty() || suffix.contains(std::path::is_separator) {
                return Err(FnTagError::config_field(
                    format!("invalid file suffix '{suffix}'"),
                    field,
                ));
            }
        }

        if self.temp_suffix == self.backup_suffix {
            return Err(FnTagError::config_field(
                "temporary and backup suffixes must differ",
                "backup_suffix",
            ));
        }

        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
