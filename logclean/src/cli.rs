// logclean/src/cli.rs
//! This file defines the command-line interface (CLI) for the logclean
//! application. The tool is single-purpose, so there are no subcommands;
//! one flat flag set selects the filters, the disposition mode, and the
//! console behavior.

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
///
/// `--replace` and `--dry-run` are validated against each other in the
/// entry point rather than through clap, so the conflict exits with the
/// user-error status instead of clap's parse-error status.
#[derive(Parser, Debug)]
#[command(
    name = "logclean",
    author = "zoid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clean IRC/ZNC chat logs",
    long_about = "Logclean is a command-line utility for cleaning IRC/ZNC chat logs. It purges \
channel join/part/quit notice lines and messages from known bot nicknames, either rewriting \
log files in place, reporting the savings a rewrite would bring, or filtering standard input \
to standard output when used in a pipe."
)]
pub struct Cli {
    /// Log file or directory to clean (reads stdin when omitted and piped).
    #[arg(value_name = "PATH", help = "Log file or directory to clean.")]
    pub path: Option<PathBuf>,

    /// Purge messages from the bot nicks listed in FILE, one per line.
    /// The flag without a value loads the default botfile.
    #[arg(
        long,
        short = 'b',
        value_name = "FILE",
        num_args = 0..=1,
        help = "Purge messages from bot nicks listed in FILE (defaults to ~/.logclean/botfile.txt)."
    )]
    pub botfile: Option<Option<PathBuf>>,

    /// Purge join/part/quit notice lines.
    #[arg(long = "join-part", short = 'j', help = "Remove JOIN/PART/QUIT lines.")]
    pub join_part: bool,

    /// Overwrite the original files with the cleaned content.
    #[arg(long, short = 'r', help = "Replace original files with their cleaned version.")]
    pub replace: bool,

    /// Compute savings without modifying anything.
    #[arg(long = "dry-run", short = 'n', help = "Don't modify files, just report.")]
    pub dry_run: bool,

    /// Recurse into subdirectories when PATH is a directory.
    #[arg(long, short = 'R', help = "Recurse into subdirectories when PATH is a directory.")]
    pub recursive: bool,

    /// Suppress console output; messages go to the run log instead.
    #[arg(long, short = 'q', help = "Suppress console output (messages go to ~/.logclean/logclean.log).")]
    pub quiet: bool,

    /// Skip the confirmation prompt before touching files.
    #[arg(long = "no-auth", short = 'y', help = "Proceed without confirmation.")]
    pub no_auth: bool,
}
