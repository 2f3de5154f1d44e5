//! Precondition checks run before any extraction.

use crate::error::ValidationError;
use std::path::{Component, Path, PathBuf};

/// Checks the input and output directories of a run.
///
/// The checks run in a fixed order and the first failure is returned:
///
/// 1. `input_dir` must be an existing directory
/// 2. `output_dir` must not be textually prefixed by `input_dir`
/// 3. `output_dir` must not be an existing regular file
///
/// The nesting check is a plain string-prefix comparison of the two paths
/// after lexical normalization (trailing slashes, `.` segments and repeated
/// separators dropped; no symlinks or `..` resolved). `/data/out` is
/// rejected for input `/data`, but so is `/data2`, while `/srv/../data/out`
/// is accepted.
pub fn validate_arguments(input_dir: &Path, output_dir: &Path) -> Result<(), ValidationError> {
    if !input_dir.is_dir() {
        return Err(ValidationError::InputMissing(input_dir.to_path_buf()));
    }

    let input = normalized(input_dir);
    let output = normalized(output_dir);
    if output.starts_with(&input) {
        return Err(ValidationError::OutputNested {
            input: input_dir.to_path_buf(),
            output: output_dir.to_path_buf(),
        });
    }

    if output_dir.is_file() {
        return Err(ValidationError::OutputIsFile(output_dir.to_path_buf()));
    }

    Ok(())
}

fn normalized(path: &Path) -> String {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if cleaned.as_os_str().is_empty() {
        ".".to_string()
    } else {
        cleaned.to_string_lossy().into_owned()
    }
}
