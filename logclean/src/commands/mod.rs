// logclean/src/commands/mod.rs
//! Command drivers for the logclean binary.

pub mod clean;
pub mod stream;

use anyhow::{Context, Result};
use log::debug;

use logclean_core::{load_botfile, FilterConfig};

use crate::cli::Cli;
use crate::paths;

/// Builds the immutable per-run filter configuration from the CLI flags,
/// loading the bot list when requested.
///
/// `-b` with a path reads that file; `-b` alone falls back to the default
/// botfile. A missing botfile propagates as an error here, before any log
/// file is touched.
pub fn build_filter_config(cli: &Cli) -> Result<FilterConfig> {
    let mut config = FilterConfig {
        purge_join_part: cli.join_part,
        ..FilterConfig::default()
    };

    if let Some(arg) = &cli.botfile {
        let botfile = match arg {
            Some(path) => path.clone(),
            None => paths::default_botfile()
                .context("could not resolve the default botfile location")?,
        };
        debug!("loading bot nicks from {}", botfile.display());
        config.bots = load_botfile(&botfile)?;
        config.purge_bots = true;
    }

    Ok(config)
}
