//! Candidate log file discovery for a user-supplied path.
//!
//! Directory traversal uses `walkdir` for the recursive policy and plain
//! `read_dir` for the flat default. Only file metadata is consulted here;
//! contents are the rewriter's concern.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::config::ScanPolicy;
use crate::errors::CleanError;

/// File extension a directory scan recognizes as a log.
pub const LOG_EXTENSION: &str = "log";

/// Collects the candidate files under `path`.
///
/// A file given directly is taken as-is — the user naming a file overrides
/// the extension heuristic. A directory is scanned for `*.log` regular
/// files, descending into subdirectories only when the policy says so.
/// `.tmp` siblings a crashed run may have left behind never match the
/// extension filter. A missing `path` is `NotFound` and fatal here: it
/// came directly from the user.
pub fn collect_files(path: &Path, policy: ScanPolicy) -> Result<Vec<PathBuf>, CleanError> {
    let meta = fs::metadata(path).map_err(|e| CleanError::from_io(path, e))?;
    if meta.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !meta.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    if policy.recursive {
        for entry in WalkDir::new(path) {
            let entry = entry.map_err(|e| walk_error(path, e))?;
            if entry.file_type().is_file() && has_log_extension(entry.path()) {
                files.push(entry.into_path());
            }
        }
    } else {
        let entries = fs::read_dir(path).map_err(|e| CleanError::from_io(path, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| CleanError::from_io(path, e))?;
            let candidate = entry.path();
            if candidate.is_file() && has_log_extension(&candidate) {
                files.push(candidate);
            }
        }
    }

    debug!(
        "discovered {} log file(s) under {}",
        files.len(),
        path.display()
    );
    Ok(files)
}

fn has_log_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == LOG_EXTENSION)
}

fn walk_error(root: &Path, err: walkdir::Error) -> CleanError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    match err.into_io_error() {
        Some(io) => CleanError::from_io(path, io),
        None => CleanError::NotFound { path },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"12:00 <alice> hi\n").unwrap();
    }

    #[test]
    fn explicit_file_is_taken_as_is() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        touch(&file);
        let files = collect_files(&file, ScanPolicy::default()).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn flat_scan_picks_only_top_level_logs() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.log"));
        touch(&dir.path().join("b.log.tmp"));
        touch(&dir.path().join("c.txt"));
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        touch(&sub.join("d.log"));

        let mut files = collect_files(dir.path(), ScanPolicy::default()).unwrap();
        files.sort();
        assert_eq!(files, vec![dir.path().join("a.log")]);
    }

    #[test]
    fn recursive_scan_descends() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.log"));
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        touch(&sub.join("d.log"));
        touch(&sub.join("e.txt"));

        let mut files = collect_files(dir.path(), ScanPolicy { recursive: true }).unwrap();
        files.sort();
        assert_eq!(files, vec![dir.path().join("a.log"), sub.join("d.log")]);
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        let err = collect_files(&dir.path().join("absent"), ScanPolicy::default()).unwrap_err();
        assert!(err.is_recoverable());
    }
}
