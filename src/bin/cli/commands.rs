//! Command Execution Logic
//!
//! Runs one check session and prints its findings.

use std::io::{self, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fntags::Session;

use crate::cli::args::Cli;
use crate::cli::config_builder::build_tag_config;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` is honoured unless `--verbose` forces debug output.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Check (and with `-w`, rewrite) the fn tags under `args.path`.
///
/// Findings are printed to stdout and never fail the command; every error
/// is fatal and stops the run.
pub fn check_command(args: &Cli) -> anyhow::Result<()> {
    let config = build_tag_config(args);
    let mut session = Session::new(config).context("Invalid configuration")?;

    session
        .load(&args.path)
        .with_context(|| format!("Failed to load {}", args.path.display()))?;

    let reconciliation = session.reconcile()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for finding in &reconciliation.findings {
        writeln!(out, "{finding}")?;
    }
    out.flush()?;

    let rewritten = session.rewrite(&reconciliation)?;

    info!(
        units = session.units().len(),
        checked = reconciliation.checked,
        incorrect = reconciliation.findings.len(),
        legacy = reconciliation.legacy,
        rewritten = rewritten.len(),
        "fn tag check complete"
    );

    Ok(())
}
