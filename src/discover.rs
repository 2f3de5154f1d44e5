//! Archive discovery in the input directory.

use crate::error::FlattenError;
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Finds archives in `input_dir` whose file name matches `pattern`.
///
/// Only the top level of `input_dir` is searched. Matches that are not
/// regular files are ignored. The result is sorted by path, which fixes the
/// extraction order and therefore which archive wins on a name collision.
///
/// # Errors
///
/// Returns an error if `pattern` is not a valid glob or a matched entry
/// cannot be inspected.
pub fn find_archives(input_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, FlattenError> {
    let escaped_dir = Pattern::escape(&input_dir.to_string_lossy());
    let full_pattern = format!("{}/{}", escaped_dir, pattern);

    let mut archives = Vec::new();
    for entry in glob::glob(&full_pattern)? {
        let path = entry?;
        if path.is_file() {
            archives.push(path);
        } else {
            debug!("Ignoring {}: not a regular file", path.display());
        }
    }
    archives.sort();

    Ok(archives)
}
