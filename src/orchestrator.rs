//! Main orchestration logic for flattening archives.

use crate::discover::find_archives;
use crate::error::FlattenError;
use crate::extract::extract_archive;
use crate::report::Reporter;
use crate::types::FlattenConfig;
use std::time::Instant;

/// Extracts every matching archive of `config.input_dir` into
/// `config.output_dir`.
///
/// This is the main entry point. It performs the following steps:
///
/// 1. Creates the output directory (and any missing parents)
/// 2. Finds archives matching `config.pattern`, non-recursively
/// 3. Extracts each archive in turn into the shared output directory
/// 4. Reports completion
///
/// Archives are extracted one after another in path order, so when two
/// archives contain the same entry name the later archive's copy wins.
/// Entries that cannot be written are reported to `reporter` and skipped.
///
/// The caller is expected to have checked the directories with
/// [`crate::validate_arguments`] first; in particular an output directory
/// nested inside the input directory is not detected here.
///
/// # Arguments
///
/// * `config` - Input/output directories and archive pattern
/// * `reporter` - Receives progress and skipped-entry events
///
/// # Returns
///
/// `Ok(())` once every archive has been processed, however many entries were
/// skipped. An error if the output directory cannot be created, an archive
/// cannot be opened as ZIP, or entry data cannot be read.
///
/// # Example
///
/// ```no_run
/// use takeout_flattener::{run, FlattenConfig, NoopReporter};
///
/// # fn example() -> Result<(), takeout_flattener::FlattenError> {
/// let config = FlattenConfig::new("Takeout", "Flattened");
/// run(&config, &mut NoopReporter)?;
/// # Ok(())
/// # }
/// ```
pub fn run(config: &FlattenConfig, reporter: &mut dyn Reporter) -> Result<(), FlattenError> {
    let started = Instant::now();

    std::fs::create_dir_all(&config.output_dir)?;

    let archives = find_archives(&config.input_dir, &config.pattern)?;
    reporter.archives_found(archives.len());

    for archive in &archives {
        reporter.archive_started(archive);
        let outcome = extract_archive(archive, &config.output_dir, reporter)?;
        reporter.archive_finished(archive, outcome.written, outcome.skipped);
    }

    reporter.finished(started.elapsed());
    Ok(())
}
