//! Configuration building logic for check settings.

use fntags::TagCheckConfig;
use tracing::debug;

use crate::cli::args::Cli;

/// Build the library configuration from CLI arguments.
pub fn build_tag_config(args: &Cli) -> TagCheckConfig {
    let config = TagCheckConfig::default().with_write(args.write);
    debug!(?config, "built check configuration");
    config
}
