//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - config_builder: turning arguments into a library configuration
//! - commands: command execution and output

pub mod args;
pub mod commands;
pub mod config_builder;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
