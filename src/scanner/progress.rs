use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

/// Number of scanned files between two progress notifications.
pub const PROGRESS_INTERVAL: u64 = 100;

/// Progress update sent through a channel sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanProgress {
    pub files_scanned: u64,
    /// Directory being visited when the notification fired
    pub current_dir: PathBuf,
}

/// Receiver of progress notifications.
///
/// Called synchronously from the scanning thread, in traversal order.
/// Implementations that need to reach a UI thread must hand off themselves.
pub trait ProgressSink {
    fn on_progress(&mut self, files_scanned: u64, current_dir: &Path);
}

impl<F> ProgressSink for F
where
    F: FnMut(u64, &Path),
{
    fn on_progress(&mut self, files_scanned: u64, current_dir: &Path) {
        self(files_scanned, current_dir)
    }
}

impl ProgressSink for Sender<ScanProgress> {
    fn on_progress(&mut self, files_scanned: u64, current_dir: &Path) {
        // A dropped receiver just means nobody is listening anymore
        let _ = self.send(ScanProgress {
            files_scanned,
            current_dir: current_dir.to_path_buf(),
        });
    }
}
