#!/usr/bin/env rust
//! fns - fn tag checker for Go sources
//!
//! Reports Go functions and methods whose `fn` tag literal does not match
//! the canonical `package.file.[Type-]name` form, and with `-w` rewrites
//! the files to fix them.

use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging on stderr; stdout carries findings only
    cli::init_logging(cli.verbose);

    cli::check_command(&cli)
}
