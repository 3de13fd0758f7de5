//! # fntags: fn tag checker for Go sources
//!
//! Go code following this convention starts every function body with a
//! self-identifying tag:
//!
//! ```go
//! func (w *Widget) Render() string {
//!     fn := "shapes.widget.*Widget-Render"
//!     ...
//! }
//! ```
//!
//! This library parses Go files with tree-sitter, derives the canonical tag
//! of every function and method, reports tags that do not match, and can
//! rewrite the files to correct them.
//!
//! ## Architecture
//!
//! ```text
//! path ──► Loader ──► SourceUnits ──► Reconciler ──► Findings
//!          (lang)                     (detectors)      │
//!                                          │           ▼
//!                                          └─► Edits ─► Patcher ─► Rewriter
//!                                                         (io)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fntags::{Session, TagCheckConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = Session::run(TagCheckConfig::default(), "./shapes".as_ref())?;
//!     for finding in &report.findings {
//!         println!("{finding}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core configuration, errors and session driver
pub mod core {
    //! Core configuration, error handling and the run pipeline.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
    pub mod pipeline;
}

// Tag checking
pub mod detectors {
    //! Convention detectors.

    pub mod fn_tags;
}

// Language-specific AST adapters
pub mod lang {
    //! Go parsing and source unit loading.

    pub mod common;
    // Tree-sitter adapter
    pub mod go;
    pub mod loader;
}

// Text patching and file rewriting
pub mod io {
    //! Edit application and on-disk rewriting.

    pub mod patch;
    pub mod rewrite;
}

// Re-export primary types for convenience
pub use core::config::TagCheckConfig;
pub use core::errors::{FnTagError, Result, ResultExt};
pub use core::pipeline::{RunReport, Session};
pub use detectors::fn_tags::{CanonicalTag, Finding, Reconciler, Reconciliation};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
