//! Run configuration for the cleaning pipeline.
//!
//! `FilterConfig` is constructed once at startup from CLI flags and an
//! optional bot-list file, then passed by shared reference into every
//! classification call. There is no ambient global state.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::errors::CleanError;

/// Which filters are active for a run, and against which bot nicks.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Purge `*** Joins:/Parts:/Quits:` channel-event notice lines.
    pub purge_join_part: bool,
    /// Purge lines whose nickname field is a known bot.
    pub purge_bots: bool,
    /// Bot nicknames, stored without surrounding angle brackets.
    pub bots: HashSet<String>,
}

impl FilterConfig {
    /// True when at least one filter could ever purge a line.
    pub fn is_active(&self) -> bool {
        self.purge_join_part || self.purge_bots
    }
}

/// What to do with the cleaned output of each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanMode {
    /// Compute and report savings; leave the source untouched.
    Report,
    /// Like `Report`, but the summary phrasing makes the hypothetical
    /// nature of the numbers explicit.
    DryRun,
    /// Atomically replace the source with the cleaned content.
    Replace,
}

impl CleanMode {
    /// True only for the mode that overwrites the original file.
    pub fn mutates_source(self) -> bool {
        matches!(self, CleanMode::Replace)
    }
}

/// Directory-scan depth policy. Flat by default; callers opt into
/// descending through subdirectories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanPolicy {
    pub recursive: bool,
}

/// Loads a bot-nick list: one nickname per line, trailing line ending
/// stripped, bytes decoded as UTF-8 with replacement.
///
/// Blank lines are dropped. An empty-string entry would otherwise match
/// the bare `<>` nick field some clients emit for server notices.
pub fn load_botfile(path: &Path) -> Result<HashSet<String>, CleanError> {
    let file = File::open(path).map_err(|e| CleanError::from_io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut bots = HashSet::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| CleanError::from_io(path, e))?;
        if read == 0 {
            break;
        }
        let nick = String::from_utf8_lossy(&buf);
        let nick = nick.trim_end_matches(['\n', '\r']);
        if !nick.is_empty() {
            bots.insert(nick.to_string());
        }
    }

    debug!("loaded {} bot nick(s) from {}", bots.len(), path.display());
    Ok(bots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_botfile(dir: &tempfile::TempDir, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join("botfile.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn loads_one_nick_per_line() {
        let dir = tempdir().unwrap();
        let path = write_botfile(&dir, b"feedbot\nGithubBot\nweatherbot\n");
        let bots = load_botfile(&path).unwrap();
        assert_eq!(bots.len(), 3);
        assert!(bots.contains("GithubBot"));
    }

    #[test]
    fn blank_lines_do_not_become_bot_entries() {
        let dir = tempdir().unwrap();
        let path = write_botfile(&dir, b"feedbot\n\n\nweatherbot\n");
        let bots = load_botfile(&path).unwrap();
        assert_eq!(bots.len(), 2);
        assert!(!bots.contains(""));
    }

    #[test]
    fn crlf_endings_are_stripped() {
        let dir = tempdir().unwrap();
        let path = write_botfile(&dir, b"feedbot\r\nweatherbot\r\n");
        let bots = load_botfile(&path).unwrap();
        assert!(bots.contains("feedbot"));
        assert!(bots.contains("weatherbot"));
    }

    #[test]
    fn invalid_utf8_nicks_are_replaced_not_fatal() {
        let dir = tempdir().unwrap();
        let path = write_botfile(&dir, b"feed\xffbot\n");
        let bots = load_botfile(&path).unwrap();
        assert_eq!(bots.len(), 1);
    }

    #[test]
    fn missing_botfile_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_botfile(&dir.path().join("absent.txt")).unwrap_err();
        assert!(err.is_recoverable());
    }
}
