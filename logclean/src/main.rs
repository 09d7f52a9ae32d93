// logclean/src/main.rs
//! logclean entry point: flag parsing, logger bootstrap, and dispatch
//! between the batch and stream drivers.
//!
//! A positional path selects batch mode. Without one, a piped stdin
//! selects stream mode, and an interactive terminal with nothing to read
//! is a user error.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use log::debug;

use logclean::cli::Cli;
use logclean::commands::{self, clean, stream};
use logclean::{logger, EXIT_USER_ERROR};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init();
    debug!("parsed CLI: {cli:?}");

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_USER_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    if cli.replace && cli.dry_run {
        eprintln!("Conflicting flags: -r and -n; exiting.");
        return Ok(EXIT_USER_ERROR);
    }

    if let Some(path) = &cli.path {
        return clean::run(cli, path);
    }

    if !io::stdin().is_terminal() {
        let config = commands::build_filter_config(cli)?;
        return Ok(stream::run(&config));
    }

    eprintln!("No input provided. Specify a log file/directory or provide input via stdin.");
    Ok(EXIT_USER_ERROR)
}
