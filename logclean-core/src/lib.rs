// logclean-core/src/lib.rs
//! # logclean Core Library
//!
//! `logclean-core` provides the filtering logic behind the `logclean` CLI:
//! deciding which lines of an IRC/ZNC chat log are noise, rewriting files
//! through a temporary sibling, and driving a batch of files while
//! accumulating savings.
//!
//! The library is synchronous and single-threaded by design. It owns no
//! terminal concerns and never exits the process; all failures surface as
//! [`CleanError`] values the caller inspects.
//!
//! ## Modules
//!
//! * `config`: the immutable per-run [`FilterConfig`], the [`CleanMode`]
//!   disposition, and bot-list loading.
//! * `classifier`: the per-line purge decision.
//! * `rewriter`: the source → temp-file → disposition pipeline.
//! * `batch`: the per-file loop, progress observer, and summary accounting.
//! * `discovery`: candidate log file collection for a path argument.
//! * `errors`: the structured error enum.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use logclean_core::{rewrite, CleanMode, FilterConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), logclean_core::CleanError> {
//!     let config = FilterConfig {
//!         purge_join_part: true,
//!         ..FilterConfig::default()
//!     };
//!     let result = rewrite(Path::new("channel.log"), &config, CleanMode::DryRun)?;
//!     println!("{} line(s) would be purged", result.lines_removed);
//!     Ok(())
//! }
//! ```
//!
//! License: MIT OR Apache-2.0

pub mod batch;
pub mod classifier;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod rewriter;

/// Re-exports the per-run configuration types and bot-list loader.
pub use config::{load_botfile, CleanMode, FilterConfig, ScanPolicy};

/// Re-exports the structured error type.
pub use errors::CleanError;

/// Re-exports the per-line purge decision.
pub use classifier::should_purge;

/// Re-exports the file rewrite pipeline and its per-file result.
pub use rewriter::{rewrite, CleanResult};

/// Re-exports the batch driver, its observer seam, and the run summary.
pub use batch::{run_batch, BatchObserver, BatchSummary};

/// Re-exports candidate file discovery.
pub use discovery::{collect_files, LOG_EXTENSION};
