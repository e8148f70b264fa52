use serde::Serialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A regular file found during a scan, together with its size.
///
/// Ordering and equality only look at `(size, path)`, so two entries for the
/// same file compare equal even if their modification times were read at
/// different moments.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    /// Apparent size in bytes
    pub size: u64,

    /// Path as discovered under the scan root
    pub path: PathBuf,

    /// Last modification time, if the platform reports one
    #[serde(skip)]
    pub modified: Option<SystemTime>,
}

impl FileEntry {
    pub fn new(size: u64, path: PathBuf, modified: Option<SystemTime>) -> Self {
        Self {
            size,
            path,
            modified,
        }
    }

    /// File name (last path component), or the full path if there is none.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    /// Directory containing the file.
    pub fn location(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

impl PartialEq for FileEntry {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.path == other.path
    }
}

impl Eq for FileEntry {}

impl PartialOrd for FileEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| self.path.cmp(&other.path))
    }
}
