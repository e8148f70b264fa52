use serde::Serialize;
use std::path::PathBuf;

use super::entry::FileEntry;

/// A file or directory that could not be read during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAccessError {
    pub path: PathBuf,
    pub message: String,
}

/// Counters for a single scan call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanStats {
    /// Files whose size was read and offered to the top-K set
    pub files_scanned: u64,
    /// Number of access failures
    pub error_count: u64,
    /// Access failures in traversal order
    pub errors: Vec<FileAccessError>,
}

impl ScanStats {
    pub(crate) fn record_error(&mut self, path: PathBuf, message: String) {
        tracing::debug!(path = %path.display(), %message, "Skipping inaccessible entry");
        self.error_count += 1;
        self.errors.push(FileAccessError { path, message });
    }
}

/// Outcome of a largest-files scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Largest files, sorted by size descending
    pub entries: Vec<FileEntry>,
    pub stats: ScanStats,
}

/// Aggregate numbers for a whole directory tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DirectoryStats {
    pub total_size: u64,
    /// Regular files only
    pub file_count: u64,
    /// Subdirectories below the root
    pub directory_count: u64,
    pub average_file_size: f64,
    pub error_count: u64,
    pub errors: Vec<FileAccessError>,
}

impl DirectoryStats {
    pub(crate) fn add_file(&mut self, size: u64) {
        self.total_size += size;
        self.file_count += 1;
    }

    pub(crate) fn record_error(&mut self, path: PathBuf, message: String) {
        tracing::debug!(path = %path.display(), %message, "Skipping inaccessible entry");
        self.error_count += 1;
        self.errors.push(FileAccessError { path, message });
    }

    pub(crate) fn finish(&mut self) {
        self.average_file_size = if self.file_count > 0 {
            self.total_size as f64 / self.file_count as f64
        } else {
            0.0
        };
    }
}
