//! Reporting hooks for flatten runs.

use std::io;
use std::path::Path;
use std::time::Duration;

/// Receives progress and diagnostics from [`crate::run`].
///
/// The flattener itself never logs; everything it has to say goes through
/// this trait, so callers decide where it ends up (log file, progress bar,
/// a test recorder).
pub trait Reporter {
    /// Called once after discovery with the number of matched archives.
    fn archives_found(&mut self, count: usize);

    /// Called before the first entry of `archive` is extracted.
    fn archive_started(&mut self, archive: &Path);

    /// Called when an entry could not be written and was skipped.
    fn entry_skipped(&mut self, archive: &Path, entry: &str, error: &io::Error);

    /// Called after every entry of `archive` has been attempted.
    fn archive_finished(&mut self, archive: &Path, written: usize, skipped: usize);

    /// Called once after the last archive.
    fn finished(&mut self, elapsed: Duration);
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn archives_found(&mut self, _count: usize) {}

    fn archive_started(&mut self, _archive: &Path) {}

    fn entry_skipped(&mut self, _archive: &Path, _entry: &str, _error: &io::Error) {}

    fn archive_finished(&mut self, _archive: &Path, _written: usize, _skipped: usize) {}

    fn finished(&mut self, _elapsed: Duration) {}
}
