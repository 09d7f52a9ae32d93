// logclean/src/lib.rs
//! # logclean CLI Application
//!
//! This crate provides the command-line interface around `logclean-core`:
//! flag parsing, logger bootstrap, the quiet-aware console with its
//! persistent run log, and the batch and stream command drivers.

pub mod cli;
pub mod commands;
pub mod console;
pub mod logger;
pub mod paths;

/// Process exit status for user-input and confirmation errors,
/// conflicting flags, and fatal I/O.
pub const EXIT_USER_ERROR: u8 = 1;

/// Process exit status when no log files were found to clean. Argument
/// parse failures share this status via clap's convention.
pub const EXIT_NO_FILES: u8 = 2;

/// Process exit status for a successful run.
pub const EXIT_OK: u8 = 0;
