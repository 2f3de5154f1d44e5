//! Data structures for flatten operations.

use clap::ValueEnum;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Glob matched against file names in the input directory.
pub const DEFAULT_ARCHIVE_PATTERN: &str = "takeout-*.zip";

/// Log file written to the current working directory unless overridden.
pub const DEFAULT_LOG_FILE: &str = "google-takeout-flattener.log";

/// Configuration for a flatten run.
///
/// # Example
///
/// ```
/// use takeout_flattener::FlattenConfig;
///
/// let config = FlattenConfig::new("Takeout", "Flattened");
/// assert_eq!(config.pattern, "takeout-*.zip");
/// ```
#[derive(Debug, Clone)]
pub struct FlattenConfig {
    /// Directory holding the exported archives (not searched recursively).
    pub input_dir: PathBuf,
    /// Directory every archive is extracted into.
    pub output_dir: PathBuf,
    /// File name glob selecting archives inside `input_dir`.
    pub pattern: String,
}

impl FlattenConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("flattened"),
            pattern: DEFAULT_ARCHIVE_PATTERN.to_string(),
        }
    }
}

/// Log severity accepted on the command line.
///
/// Names follow the export tool's historical level names; matching is
/// case-insensitive at the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[value(name = "CRITICAL")]
    Critical,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "INFO")]
    Info,
    #[value(name = "DEBUG")]
    Debug,
    /// Record everything.
    #[value(name = "NOTSET")]
    NotSet,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            // tracing has no level above ERROR
            LogLevel::Critical | LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::NotSet => LevelFilter::TRACE,
        }
    }
}
