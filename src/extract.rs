//! ZIP archive extraction with per-entry fault isolation.

use crate::error::FlattenError;
use crate::report::Reporter;
use std::fs::{self, File};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use zip::ZipArchive;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Counts for one extracted archive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArchiveOutcome {
    pub written: usize,
    pub skipped: usize,
}

/// Why a single entry did not land.
#[derive(Debug)]
enum EntryFailure {
    /// Failure on the filesystem side; the entry is skipped.
    Write(io::Error),
    /// Failure reading the entry's data out of the archive; fatal.
    Read(io::Error),
}

/// Extracts every entry of a ZIP archive into `output_dir`.
///
/// Entries are processed in the archive's own order. Names are cleaned of
/// absolute prefixes and `..` segments, so `../a.txt` lands at
/// `output_dir/a.txt`. An entry whose destination cannot be written (OS
/// error, or nothing left of the name after cleaning) is reported through
/// `reporter` and skipped; the remaining entries are still extracted.
///
/// # Arguments
///
/// * `archive_path` - Path to the ZIP file
/// * `output_dir` - Target directory for extraction (must exist)
/// * `reporter` - Receives one `entry_skipped` call per skipped entry
///
/// # Returns
///
/// Written/skipped counts, or an error if the archive cannot be opened or an
/// entry's data cannot be read.
pub(crate) fn extract_archive(
    archive_path: &Path,
    output_dir: &Path,
    reporter: &mut dyn Reporter,
) -> Result<ArchiveOutcome, FlattenError> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    let mut outcome = ArchiveOutcome::default();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();

        // `..`, root and drive components are dropped
        let relative = entry.mangled_name();
        let result = if relative.as_os_str().is_empty() {
            Err(EntryFailure::Write(empty_name_error(&name)))
        } else {
            let destination = output_dir.join(relative);
            if entry.is_dir() {
                fs::create_dir_all(&destination).map_err(EntryFailure::Write)
            } else {
                write_atomically(&mut entry, &destination)
            }
        };

        match result {
            Ok(()) => outcome.written += 1,
            Err(EntryFailure::Write(error)) => {
                reporter.entry_skipped(archive_path, &name, &error);
                outcome.skipped += 1;
            }
            Err(EntryFailure::Read(source)) => {
                return Err(FlattenError::CorruptEntry {
                    archive: archive_path.to_path_buf(),
                    entry: name,
                    source,
                });
            }
        }
    }

    Ok(outcome)
}

fn empty_name_error(name: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("entry name {:?} has no usable path components", name),
    )
}

/// Streams `reader` into `destination` through a temporary file in the same
/// directory, renaming it into place only once every byte has been copied.
fn write_atomically(reader: &mut impl Read, destination: &Path) -> Result<(), EntryFailure> {
    let parent = destination.parent().ok_or_else(|| {
        EntryFailure::Write(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no parent directory", destination.display()),
        ))
    })?;
    fs::create_dir_all(parent).map_err(EntryFailure::Write)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(EntryFailure::Write)?;
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(EntryFailure::Read(e)),
        };
        temp.write_all(&buffer[..n]).map_err(EntryFailure::Write)?;
    }
    temp.flush().map_err(EntryFailure::Write)?;

    #[cfg(unix)]
    {
        // NamedTempFile is created 0600
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(EntryFailure::Write)?;
    }

    temp.persist(destination).map_err(|e| EntryFailure::Write(e.error))?;
    Ok(())
}
