//! Streaming file rewrite: source, through the classifier, into a sibling
//! temporary file, then a mode-dependent disposition.
//!
//! The temporary file lives in the source's own directory so the final
//! replace is a single same-filesystem rename. The source is never
//! modified in place; the temporary file is always complete and flushed
//! before any rename happens.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::classifier::should_purge;
use crate::config::{CleanMode, FilterConfig};
use crate::errors::CleanError;

/// Suffix appended to the source file name for the temporary output.
const TMP_SUFFIX: &str = ".tmp";

/// Bytes in a binary megabyte.
const BYTES_PER_MB: f64 = 1_048_576.0;

/// Per-file outcome of a rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanResult {
    /// Size of the source file before the pass.
    pub bytes_before: u64,
    /// Size the cleaned file has (or would have).
    pub bytes_after: u64,
    /// Number of lines the classifier purged.
    pub lines_removed: u64,
}

impl CleanResult {
    /// Binary megabytes the cleaned file is (or would be) smaller,
    /// rounded to two decimal places.
    pub fn megabytes_saved(&self) -> f64 {
        to_megabytes(self.bytes_before.saturating_sub(self.bytes_after))
    }
}

/// Converts a byte count to binary megabytes, rounded to two decimals.
pub(crate) fn to_megabytes(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}

/// Resolves the sibling temporary path for `source`. Same directory by
/// construction, so the rename in `Replace` mode never crosses a
/// filesystem boundary.
fn tmp_path(source: &Path) -> PathBuf {
    let mut name = source
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(TMP_SUFFIX);
    source.with_file_name(name)
}

/// Streams `source` line by line through the classifier into a sibling
/// temporary file, then disposes of the temporary file according to
/// `mode`: renamed onto the source (`Replace`) or removed (`DryRun` and
/// `Report`, which differ only in how the caller phrases the numbers).
///
/// Bytes are decoded as UTF-8 with replacement, so malformed logs never
/// abort a run; the decoded text is what survives to the output. A source
/// missing at open time is the recoverable `NotFound`; every other I/O
/// failure is fatal for the file.
pub fn rewrite(
    source: &Path,
    config: &FilterConfig,
    mode: CleanMode,
) -> Result<CleanResult, CleanError> {
    let bytes_before = fs::metadata(source)
        .map_err(|e| CleanError::from_io(source, e))?
        .len();
    let infile = File::open(source).map_err(|e| CleanError::from_io(source, e))?;

    let tmp = tmp_path(source);
    let outfile = File::create(&tmp).map_err(|e| CleanError::Io {
        path: tmp.clone(),
        source: e,
    })?;

    let mut reader = BufReader::new(infile);
    let mut writer = BufWriter::new(outfile);
    let mut lines_removed = 0u64;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| CleanError::Io {
                path: source.to_path_buf(),
                source: e,
            })?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if should_purge(&line, config) {
            lines_removed += 1;
        } else {
            writer.write_all(line.as_bytes()).map_err(|e| CleanError::Io {
                path: tmp.clone(),
                source: e,
            })?;
        }
    }

    writer.flush().map_err(|e| CleanError::Io {
        path: tmp.clone(),
        source: e,
    })?;
    drop(writer);

    let bytes_after = fs::metadata(&tmp)
        .map_err(|e| CleanError::Io {
            path: tmp.clone(),
            source: e,
        })?
        .len();

    match mode {
        CleanMode::Replace => {
            fs::rename(&tmp, source).map_err(|e| CleanError::Io {
                path: source.to_path_buf(),
                source: e,
            })?;
        }
        CleanMode::DryRun | CleanMode::Report => {
            fs::remove_file(&tmp).map_err(|e| CleanError::Io {
                path: tmp,
                source: e,
            })?;
        }
    }

    debug!(
        "{}: {} line(s) purged, {} -> {} bytes",
        source.display(),
        lines_removed,
        bytes_before,
        bytes_after
    );

    Ok(CleanResult {
        bytes_before,
        bytes_after,
        lines_removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_is_a_sibling_with_suffix() {
        assert_eq!(
            tmp_path(Path::new("/var/log/znc/chan.log")),
            PathBuf::from("/var/log/znc/chan.log.tmp")
        );
    }

    #[test]
    fn megabytes_are_binary_and_rounded() {
        assert_eq!(to_megabytes(1_048_576), 1.0);
        assert_eq!(to_megabytes(1_572_864), 1.5);
        assert_eq!(to_megabytes(15_728), 0.01);
        assert_eq!(to_megabytes(0), 0.0);
    }

    #[test]
    fn savings_never_underflow() {
        let result = CleanResult {
            bytes_before: 10,
            bytes_after: 20,
            lines_removed: 0,
        };
        assert_eq!(result.megabytes_saved(), 0.0);
    }
}
