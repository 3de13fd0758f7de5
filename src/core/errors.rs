//! Error types for the fntags library.
//!
//! Every failure in the tool is either a finding (reported, never an error)
//! or one of the fatal conditions below. Nothing is retried.

use std::io;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use thiserror::Error;

/// Main result type for fntags operations.
pub type Result<T> = std::result::Result<T, FnTagError>;

/// Error type for all fntags operations.
#[derive(Error, Debug)]
pub enum FnTagError {
    /// I/O related errors (stat, read, write, rename, remove)
    #[error("I/O error: {message}{}", display_path(.path))]
    Io {
        /// Human-readable error message
        message: String,
        /// Path the operation was acting on
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Parsing and language processing errors
    #[error("Parse error in {language}: {message}{}", display_location(.file_path, .line, .column))]
    Parse {
        /// Programming language being parsed
        language: String,
        /// Error description
        message: String,
        /// File path where error occurred
        file_path: Option<String>,
        /// Line number (if available)
        line: Option<usize>,
        /// Column number (if available)
        column: Option<usize>,
    },

    /// A method receiver the naming convention cannot classify
    #[error("Unsupported receiver on {declaration} at {file_path}:{line}: {shape}")]
    UnsupportedReceiver {
        /// Declared method name
        declaration: String,
        /// File identity of the owning source unit
        file_path: String,
        /// 1-based line of the declaration
        line: usize,
        /// Description of the offending receiver
        shape: String,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
        /// Additional context
        context: Option<String>,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

fn display_location(file: &Option<String>, line: &Option<usize>, column: &Option<usize>) -> String {
    match (file, line, column) {
        (Some(file), Some(line), Some(column)) => format!(" at {file}:{line}:{column}"),
        (Some(file), Some(line), None) => format!(" at {file}:{line}"),
        (Some(file), None, _) => format!(" in {file}"),
        _ => String::new(),
    }
}

impl FnTagError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source,
        }
    }

    /// Create a new I/O error naming the path it failed on
    pub fn io_at(message: impl Into<String>, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new parse error
    pub fn parse(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
            file_path: None,
            line: None,
            column: None,
        }
    }

    /// Create a new parse error with file context
    pub fn parse_with_location(
        language: impl Into<String>,
        message: impl Into<String>,
        file_path: impl Into<String>,
        line: Option<usize>,
        column: Option<usize>,
    ) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
            file_path: Some(file_path.into()),
            line,
            column,
        }
    }

    /// Create a new unsupported receiver error
    pub fn unsupported_receiver(
        declaration: impl Into<String>,
        file_path: impl Into<String>,
        line: usize,
        shape: impl Into<String>,
    ) -> Self {
        Self::UnsupportedReceiver {
            declaration: declaration.into(),
            file_path: file_path.into(),
            line,
            shape: shape.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: None,
        }
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        match &mut self {
            Self::Internal { context: ctx, .. } => {
                *ctx = Some(context.into());
            }
            Self::Parse { file_path, .. } if file_path.is_none() => {
                *file_path = Some(context.into());
            }
            _ => {}
        }
        self
    }
}

impl From<io::Error> for FnTagError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<Utf8Error> for FnTagError {
    fn from(err: Utf8Error) -> Self {
        Self::parse("go", format!("UTF-8 encoding error: {err}"))
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<FnTagError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = FnTagError::config("Invalid configuration");
        assert!(matches!(err, FnTagError::Config { .. }));

        let err = FnTagError::parse("go", "Syntax error");
        assert!(matches!(err, FnTagError::Parse { .. }));
    }

    #[test]
    fn test_io_error_names_path() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let err = FnTagError::io_at("Failed to rename original file", "pkg/a.go", io_err);

        let display = err.to_string();
        assert!(display.contains("Failed to rename original file"));
        assert!(display.contains("pkg/a.go"));

        if let FnTagError::Io { source, .. } = &err {
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_config_field_error() {
        let err = FnTagError::config_field("must not be empty", "tag_variable");

        if let FnTagError::Config { message, field } = err {
            assert_eq!(message, "must not be empty");
            assert_eq!(field, Some("tag_variable".to_string()));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_parse_with_location_display() {
        let err = FnTagError::parse_with_location("go", "unexpected token", "./a.go", Some(4), Some(2));
        assert_eq!(
            err.to_string(),
            "Parse error in go: unexpected token at ./a.go:4:2"
        );
    }

    #[test]
    fn test_unsupported_receiver_display() {
        let err = FnTagError::unsupported_receiver("Render", "./widget.go", 12, "2 receivers");
        let display = err.to_string();
        assert!(display.contains("Render"));
        assert!(display.contains("./widget.go:12"));
        assert!(display.contains("2 receivers"));
    }

    #[test]
    fn test_with_context_internal() {
        let err = FnTagError::internal("overlapping edits").with_context("patching ./a.go");

        if let FnTagError::Internal { context, .. } = err {
            assert_eq!(context, Some("patching ./a.go".to_string()));
        } else {
            panic!("Expected Internal error");
        }
    }

    #[test]
    fn test_with_context_non_contextual_error() {
        let err = FnTagError::config("Bad config").with_context("Should not change");

        if let FnTagError::Config { message, .. } = err {
            assert_eq!(message, "Bad config");
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_result_ext_with_context() {
        let result: std::result::Result<i32, io::Error> =
            Err(io::Error::new(io::ErrorKind::InvalidInput, "Bad input"));

        let err = result.with_context(|| "Processing failed".to_string()).unwrap_err();
        assert!(matches!(err, FnTagError::Io { .. }));
    }

    #[test]
    fn test_from_utf8_error() {
        let invalid_utf8 = vec![0, 159, 146, 150];
        let utf8_err = std::str::from_utf8(&invalid_utf8).unwrap_err();
        let err: FnTagError = utf8_err.into();

        assert!(matches!(err, FnTagError::Parse { .. }));
    }
}
