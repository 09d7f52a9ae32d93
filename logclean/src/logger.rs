// logclean/src/logger.rs
//! Logger bootstrap for the binary.

use env_logger::{Builder, Env};

/// Initializes the global logger. Honors `RUST_LOG`, defaulting to `warn`
/// so diagnostics stay out of the way of the console output.
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
