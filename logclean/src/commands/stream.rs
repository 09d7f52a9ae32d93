// logclean/src/commands/stream.rs
//! Stream driver: filters standard input onto standard output.
//!
//! No temp files, no summary, no confirmation gate. Each surviving line
//! is flushed immediately so a downstream pager or `tail -f` style
//! consumer sees it without delay.

use std::io::{self, BufRead, Write};

use log::debug;

use logclean_core::{should_purge, FilterConfig};

use crate::{EXIT_OK, EXIT_USER_ERROR};

/// Reads stdin to end-of-stream, echoing the lines the classifier keeps.
/// Returns the process exit status.
///
/// A failed write means the downstream consumer closed the pipe; there is
/// no recovery path, so the run ends non-zero immediately.
pub fn run(config: &FilterConfig) -> u8 {
    debug!("stream mode, filters active: {}", config.is_active());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = match reader.read_until(b'\n', &mut buf) {
            Ok(n) => n,
            Err(_) => return EXIT_USER_ERROR,
        };
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if should_purge(&line, config) {
            continue;
        }
        let written = writer
            .write_all(line.as_bytes())
            .and_then(|_| writer.flush());
        if written.is_err() {
            return EXIT_USER_ERROR;
        }
    }

    EXIT_OK
}
