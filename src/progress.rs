//! Tracing-backed reporter with a per-archive progress bar.

use crate::report::Reporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// [`Reporter`] used by the CLI.
///
/// Every event becomes a `tracing` record; archive progress is additionally
/// shown as a bar on stderr (hidden when stderr is not a terminal).
pub struct ProgressReporter {
    pb: ProgressBar,
    total_skipped: usize,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} ZIP File {msg} | {elapsed_precise} elapsed, ETA {eta_precise}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░ "),
        );
        Self { pb, total_skipped: 0 }
    }

    /// Entries skipped so far across all archives.
    pub fn total_skipped(&self) -> usize {
        self.total_skipped
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ProgressReporter {
    fn archives_found(&mut self, count: usize) {
        info!("Found {} Google Takeout files", count);
        self.pb.set_length(count as u64);
    }

    fn archive_started(&mut self, archive: &Path) {
        debug!("Extracting {}...", archive.display());
        let name = archive
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("");
        self.pb.set_message(format!("| 📂 {}", name));
    }

    fn entry_skipped(&mut self, archive: &Path, entry: &str, error: &io::Error) {
        self.total_skipped += 1;
        warn!(
            "Skipped file {} from {} due to OS error: {}",
            entry,
            archive.display(),
            error
        );
    }

    fn archive_finished(&mut self, archive: &Path, written: usize, skipped: usize) {
        debug!(
            "{} successfully extracted ({} written, {} skipped)",
            archive.display(),
            written,
            skipped
        );
        self.pb.inc(1);
    }

    fn finished(&mut self, elapsed: Duration) {
        self.pb.finish_with_message("| ✅ Done");
        info!(
            "Successfully unzipped all files in {:.2?} ({} entries skipped)",
            elapsed, self.total_skipped
        );
    }
}
