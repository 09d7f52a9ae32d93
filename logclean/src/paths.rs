// logclean/src/paths.rs
//! Per-user state paths.
//!
//! Everything logclean persists lives in one directory: the run log that
//! quiet mode appends to and the default botfile location. The directory
//! is `~/.logclean`, overridable through `LOGCLEAN_DIR` so tests (and the
//! occasional XDG purist) can relocate it.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Environment variable that relocates the state directory.
pub const STATE_DIR_ENV: &str = "LOGCLEAN_DIR";

const STATE_DIR_NAME: &str = ".logclean";
const RUN_LOG_NAME: &str = "logclean.log";
const DEFAULT_BOTFILE_NAME: &str = "botfile.txt";

/// Resolves the per-user state directory, creating it on demand.
pub fn state_dir() -> io::Result<PathBuf> {
    let dir = match env::var_os(STATE_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "home directory not resolvable")
            })?
            .join(STATE_DIR_NAME),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// The append-only run log quiet mode writes to.
pub fn run_log_file() -> io::Result<PathBuf> {
    Ok(state_dir()?.join(RUN_LOG_NAME))
}

/// Where `-b` without an explicit path looks for bot nicks.
pub fn default_botfile() -> io::Result<PathBuf> {
    Ok(state_dir()?.join(DEFAULT_BOTFILE_NAME))
}
