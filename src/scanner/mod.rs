mod entry;
mod options;
mod progress;
mod stats;
mod top_k;
mod walker;

pub use entry::FileEntry;
pub use options::{is_hidden, CancelToken, ScanOptions, DEFAULT_TOP_N, MAX_TOP_N, MIN_TOP_N};
pub use progress::{ProgressSink, ScanProgress, PROGRESS_INTERVAL};
pub use stats::{DirectoryStats, FileAccessError, ScanResult, ScanStats};
pub use top_k::TopKSet;
pub use walker::{directory_stats, find_largest_files};
