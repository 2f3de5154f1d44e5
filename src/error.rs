//! Error types for flatten operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a flatten run.
///
/// Per-entry write failures never show up here; they are reported through
/// [`crate::Reporter::entry_skipped`] and the run continues.
#[derive(Error, Debug)]
pub enum FlattenError {
    /// I/O error outside of entry writing (creating the output directory,
    /// opening an archive file).
    #[error(transparent)]
    IoError(#[from] io::Error),

    /// The archive could not be read as a ZIP file.
    #[error(transparent)]
    ZipError(#[from] zip::result::ZipError),

    /// The archive name pattern is not a valid glob.
    #[error(transparent)]
    PatternError(#[from] glob::PatternError),

    /// A directory entry matching the pattern could not be inspected.
    #[error(transparent)]
    GlobError(#[from] glob::GlobError),

    /// Entry data could not be read or decompressed (bad CRC, truncated data).
    #[error("Corrupt entry {entry} in {}: {source}", .archive.display())]
    CorruptEntry {
        archive: PathBuf,
        entry: String,
        #[source]
        source: io::Error,
    },
}

/// Precondition failures detected before any extraction starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Input directory ({}) does not exist", .0.display())]
    InputMissing(PathBuf),

    #[error(
        "Output directory ({}) must not reside within input directory ({})",
        .output.display(),
        .input.display()
    )]
    OutputNested { input: PathBuf, output: PathBuf },

    #[error("Supplied output directory ({}) is an existing file", .0.display())]
    OutputIsFile(PathBuf),
}

impl ValidationError {
    /// Process exit status the CLI uses for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ValidationError::InputMissing(_) => -1,
            ValidationError::OutputNested { .. } => -2,
            ValidationError::OutputIsFile(_) => -3,
        }
    }
}
