// logclean/src/console.rs
//! User-facing console output with quiet-mode redirection.
//!
//! This is the channel for the messages a user runs the tool to see
//! (per-file savings, the summary), distinct from the `log`/`env_logger`
//! diagnostics on stderr. Normal runs print to stdout. Quiet runs append
//! to the persistent run log instead, so unattended runs still leave a
//! trace.

use std::fs::OpenOptions;
use std::io::Write;

use crate::paths;

/// Quiet-aware sink for user-facing messages.
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Prints `msg`, or appends it to the run log in quiet mode.
    ///
    /// A run log that cannot be opened is the one documented swallow in
    /// the program: the message is dropped, but the failure itself is
    /// surfaced on stderr.
    pub fn say(&self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        if self.quiet {
            if let Err(err) = append_run_log(msg) {
                eprintln!("Couldn't open logclean log file: {err}");
            }
        } else {
            println!("{msg}");
        }
    }
}

fn append_run_log(msg: &str) -> std::io::Result<()> {
    let path = paths::run_log_file()?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{msg}")
}
