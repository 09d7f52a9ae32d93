//! Batch driver: runs the rewriter over a sorted set of files and
//! accumulates the results.
//!
//! A missing file is a recoverable per-item failure; everything else
//! terminates the run. The driver inspects error variants rather than
//! catching control flow, and never retries.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::{CleanMode, FilterConfig};
use crate::errors::CleanError;
use crate::rewriter::{rewrite, to_megabytes, CleanResult};

/// Receives per-file progress while a batch runs.
///
/// The core stays free of terminal concerns; the CLI adapts this onto its
/// quiet-aware console, and tests record the calls.
pub trait BatchObserver {
    /// A file finished its rewrite pass.
    fn on_cleaned(&mut self, path: &Path, result: &CleanResult);
    /// A file vanished between discovery and processing and was skipped.
    fn on_skipped(&mut self, path: &Path);
}

/// Aggregate outcome of a batch run.
///
/// Byte counts, not pre-rounded megabyte values, are accumulated so
/// rounding error never compounds across files.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchSummary {
    pub files_cleaned: usize,
    pub files_skipped: usize,
    pub lines_removed: u64,
    pub bytes_before: u64,
    pub bytes_after: u64,
    /// Wall-clock duration of the whole batch, measured monotonically.
    pub elapsed: Duration,
}

impl BatchSummary {
    /// Binary megabytes saved across the whole batch, rounded to two
    /// decimal places.
    pub fn megabytes_saved(&self) -> f64 {
        to_megabytes(self.bytes_before.saturating_sub(self.bytes_after))
    }
}

/// Cleans every file in `files`, lexicographically ordered so repeated
/// runs produce repeated output ordering.
///
/// `NotFound` on an individual file is reported to the observer and
/// skipped; any other error aborts the batch and propagates.
pub fn run_batch(
    mut files: Vec<PathBuf>,
    config: &FilterConfig,
    mode: CleanMode,
    observer: &mut dyn BatchObserver,
) -> Result<BatchSummary, CleanError> {
    files.sort();

    let start = Instant::now();
    let mut summary = BatchSummary::default();

    for path in &files {
        match rewrite(path, config, mode) {
            Ok(result) => {
                summary.files_cleaned += 1;
                summary.lines_removed += result.lines_removed;
                summary.bytes_before += result.bytes_before;
                summary.bytes_after += result.bytes_after;
                observer.on_cleaned(path, &result);
            }
            Err(err) if err.is_recoverable() => {
                warn!("{err}");
                summary.files_skipped += 1;
                observer.on_skipped(path);
            }
            Err(err) => return Err(err),
        }
    }

    summary.elapsed = start.elapsed();
    info!(
        "batch done: {} cleaned, {} skipped, {} line(s) removed in {:?}",
        summary.files_cleaned, summary.files_skipped, summary.lines_removed, summary.elapsed
    );
    Ok(summary)
}
