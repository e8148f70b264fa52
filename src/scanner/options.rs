use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Smallest accepted `top_n`.
pub const MIN_TOP_N: usize = 1;

/// Largest accepted `top_n`.
pub const MAX_TOP_N: usize = 100;

/// Default number of files to report.
pub const DEFAULT_TOP_N: usize = 10;

/// Cooperative cancellation flag, checked before each directory is entered.
///
/// Clones share the same flag, so one can be handed to another thread (or a
/// signal handler) while the scan holds the other.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configuration options for a largest-files scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Number of files to report (1-100)
    pub top_n: usize,

    /// Only consider file names ending with this literal suffix
    pub extension: Option<String>,

    /// Include hidden files/directories (starting with .)
    pub include_hidden: bool,

    /// Cancellation flag checked between directories
    pub cancel: Option<CancelToken>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            extension: None,
            include_hidden: false,
            cancel: None,
        }
    }
}

impl ScanOptions {
    /// Create a new ScanOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many files to report
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Restrict the scan to file names ending with `suffix`
    pub fn with_extension(mut self, suffix: impl Into<String>) -> Self {
        self.extension = Some(suffix.into());
        self
    }

    /// Set whether to include hidden files
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Attach a cancellation token
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Whether `top_n` lies within the accepted range.
    pub fn top_n_is_valid(&self) -> bool {
        (MIN_TOP_N..=MAX_TOP_N).contains(&self.top_n)
    }

    /// Whether a file name passes the extension filter.
    ///
    /// Plain suffix match: case-sensitive, no globbing.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        match &self.extension {
            Some(suffix) => file_name.ends_with(suffix.as_str()),
            None => true,
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

/// Check if a path's final component follows the hidden-file convention.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
