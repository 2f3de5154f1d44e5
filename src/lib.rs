//! Takeout Flattener - merge Google Takeout ZIP exports into one directory tree
//!
//! A Takeout export arrives as several `takeout-*.zip` archives whose
//! contents overlap: each holds a slice of the same `Takeout/` hierarchy.
//! This library extracts all of them into a single output directory.
//!
//! # Features
//!
//! - **Sequential merge**: archives are extracted one by one, in path order;
//!   a later archive overwrites same-named files from an earlier one
//! - **Per-entry fault isolation**: entries the filesystem rejects (name too
//!   long, illegal characters, permissions) are skipped and reported
//! - **Atomic entries**: each file lands fully or not at all
//! - **Pluggable reporting**: progress and warnings go through [`Reporter`]
//!
//! # Example
//!
//! ```no_run
//! use takeout_flattener::{run, validate_arguments, FlattenConfig, ProgressReporter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FlattenConfig::new("Takeout", "Flattened");
//! validate_arguments(&config.input_dir, &config.output_dir)?;
//! run(&config, &mut ProgressReporter::new())?;
//! # Ok(())
//! # }
//! ```

mod discover;
mod error;
mod extract;
mod orchestrator;
mod progress;
mod report;
mod types;
mod validate;

pub use discover::find_archives;
pub use error::{FlattenError, ValidationError};
pub use orchestrator::run;
pub use progress::ProgressReporter;
pub use report::{NoopReporter, Reporter};
pub use types::{FlattenConfig, LogLevel, DEFAULT_ARCHIVE_PATTERN, DEFAULT_LOG_FILE};
pub use validate::validate_arguments;
