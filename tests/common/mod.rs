//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use takeout_flattener::Reporter;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Writes a deflate-compressed ZIP with the given (name, content) entries.
pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().unix_permissions(0o644);
    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    let bytes = zip.finish().unwrap().into_inner();
    std::fs::write(path, bytes).unwrap();
}

/// Reporter that keeps every event for later assertions.
#[derive(Default)]
pub struct RecordingReporter {
    pub found: Option<usize>,
    pub started: Vec<PathBuf>,
    pub skipped: Vec<(PathBuf, String)>,
    pub finished_archives: Vec<(PathBuf, usize, usize)>,
    pub completed: bool,
}

impl Reporter for RecordingReporter {
    fn archives_found(&mut self, count: usize) {
        self.found = Some(count);
    }

    fn archive_started(&mut self, archive: &Path) {
        self.started.push(archive.to_path_buf());
    }

    fn entry_skipped(&mut self, archive: &Path, entry: &str, _error: &io::Error) {
        self.skipped.push((archive.to_path_buf(), entry.to_string()));
    }

    fn archive_finished(&mut self, archive: &Path, written: usize, skipped: usize) {
        self.finished_archives
            .push((archive.to_path_buf(), written, skipped));
    }

    fn finished(&mut self, _elapsed: Duration) {
        self.completed = true;
    }
}

/// Relative paths and contents of every file under `root`, sorted.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<(PathBuf, Vec<u8>)>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let relative = path.strip_prefix(root).unwrap().to_path_buf();
                out.push((relative, std::fs::read(&path).unwrap()));
            }
        }
    }

    let mut files = Vec::new();
    walk(root, root, &mut files);
    files.sort();
    files
}
