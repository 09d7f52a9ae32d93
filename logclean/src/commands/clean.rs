// logclean/src/commands/clean.rs
//! Batch cleaning command: flag validation, the confirmation gate, and
//! driving the core batch loop onto the console.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use log::info;

use logclean_core::{
    collect_files, run_batch, BatchObserver, BatchSummary, CleanError, CleanMode,
    CleanResult, FilterConfig, ScanPolicy,
};

use crate::cli::Cli;
use crate::console::Console;
use crate::{EXIT_NO_FILES, EXIT_OK, EXIT_USER_ERROR};

/// Runs the batch cleaning flow end to end and returns the process exit
/// status. User errors print their one-line message here and map to the
/// user-error status; fatal I/O propagates as `Err` for the entry point
/// to report.
pub fn run(cli: &Cli, path: &Path) -> Result<u8> {
    let console = Console::new(cli.quiet);
    let config = super::build_filter_config(cli)?;

    if !config.is_active() {
        eprintln!("No flags provided, nothing to clean.");
        return Ok(EXIT_USER_ERROR);
    }

    let mode = if cli.replace {
        CleanMode::Replace
    } else if cli.dry_run {
        CleanMode::DryRun
    } else {
        CleanMode::Report
    };

    let files = match collect_files(path, ScanPolicy { recursive: cli.recursive }) {
        Ok(files) => files,
        Err(err @ CleanError::NotFound { .. }) => {
            eprintln!("{err}");
            return Ok(EXIT_USER_ERROR);
        }
        Err(err) => return Err(err.into()),
    };
    if files.is_empty() {
        eprintln!("No log files found to clean. Exiting.");
        return Ok(EXIT_NO_FILES);
    }
    info!("{} candidate file(s), mode {:?}", files.len(), mode);

    announce_filters(&config, &console);

    if cli.no_auth {
        console.say("Proceeding without confirmation.");
    } else if !confirm().context("failed to read confirmation input")? {
        println!("Aborting.");
        return Ok(EXIT_USER_ERROR);
    }

    let timestamp = Local::now().format("%Y-%m-%d [%H:%M:%S]");
    console.say(format!("{timestamp} Cleaning..."));

    let mut observer = ConsoleObserver { console: &console };
    let summary =
        run_batch(files, &config, mode, &mut observer).context("cleaning aborted")?;

    report_summary(&summary, mode, &console);
    Ok(EXIT_OK)
}

/// Names the active filters before anything is touched.
fn announce_filters(config: &FilterConfig, console: &Console) {
    match (config.purge_bots, config.purge_join_part) {
        (true, true) => console.say("Purging bots and join/part messages."),
        (true, false) => console.say("Purging bots."),
        (false, true) => console.say("Purging join/part messages."),
        (false, false) => {}
    }
}

/// Asks for the go-ahead before a destructive operation.
fn confirm() -> io::Result<bool> {
    print!("Are you sure you want to clean logs? (y/n): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Adapts the core's progress seam onto the quiet-aware console.
struct ConsoleObserver<'a> {
    console: &'a Console,
}

impl BatchObserver for ConsoleObserver<'_> {
    fn on_cleaned(&mut self, path: &Path, result: &CleanResult) {
        let shown = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.console.say(format!(
            "{} cleaned. {:.2}mb saved.",
            shown.display(),
            result.megabytes_saved()
        ));
    }

    fn on_skipped(&mut self, path: &Path) {
        self.console
            .say(format!("{}: file not found, skipping.", path.display()));
    }
}

/// Emits the run totals with the mode's phrasing: completed for `Replace`
/// and `Report`, conditional for `DryRun`.
fn report_summary(summary: &BatchSummary, mode: CleanMode, console: &Console) {
    console.say(format!(
        "Cleaning duration: {:.3} seconds.",
        summary.elapsed.as_secs_f64()
    ));
    let saved = summary.megabytes_saved();
    match mode {
        CleanMode::Replace => {
            console.say(format!("Lines purged: {}", summary.lines_removed));
            console.say(format!("Total recovery: {saved:.2}mb."));
        }
        CleanMode::DryRun => {
            console.say(format!("{} lines would be purged.", summary.lines_removed));
            console.say(format!("Cleaned files would be {saved:.2}mb smaller."));
        }
        CleanMode::Report => {
            console.say(format!("Lines purged: {}", summary.lines_removed));
            console.say(format!("Cleaned files are {saved:.2}mb smaller."));
        }
    }
}
