//! CLI Argument Structures
//!
//! Argument definitions for the `fns` binary.

use clap::Parser;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check and rewrite fn tags in Go sources
#[derive(Parser, Debug)]
#[command(name = "fns")]
#[command(version = VERSION)]
#[command(about = "Check and rewrite self-identifying fn tags in Go sources")]
#[command(long_about = "
Every Go function or method may declare a tag as the first assignment of its
body, naming where it lives:

    func (w *Widget) Render() string {
        fn := \"shapes.widget.*Widget-Render\"
        ...
    }

fns reports tags that do not match and, with -w, rewrites them.

Common Usage:

  # Report incorrect tags in one file
  fns ./shapes/widget.go

  # Report incorrect tags in every Go file of a package directory
  fns ./shapes

  # Rewrite the files with correct fn tags
  fns -w ./shapes
")]
pub struct Cli {
    /// Go source file or package directory
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Rewrite the files with correct fn tags
    #[arg(short, long)]
    pub write: bool,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
