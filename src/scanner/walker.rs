use std::fs;
use std::path::Path;
use walkdir::{IntoIter, WalkDir};

use crate::error::{Result, ScanError};

use super::entry::FileEntry;
use super::options::{is_hidden, ScanOptions, MAX_TOP_N, MIN_TOP_N};
use super::progress::{ProgressSink, PROGRESS_INTERVAL};
use super::stats::{DirectoryStats, ScanResult, ScanStats};
use super::top_k::TopKSet;

/// Find the `options.top_n` largest regular files below `root`.
///
/// Walks the whole tree on the calling thread. Hidden directories are pruned
/// and hidden files skipped unless `options.include_hidden` is set. Files
/// that cannot be stat'ed are recorded in the returned stats and never stop
/// the scan.
///
/// Every [`PROGRESS_INTERVAL`] files the progress sink, if any, receives the
/// running count and the directory being visited.
///
/// # Errors
///
/// - [`ScanError::InvalidArgument`] if `top_n` is outside 1-100
/// - [`ScanError::PathNotFound`] if `root` does not exist
/// - [`ScanError::Cancelled`] if the cancel token fires, with the partial result
pub fn find_largest_files(
    root: &Path,
    options: &ScanOptions,
    mut progress: Option<&mut dyn ProgressSink>,
) -> Result<ScanResult> {
    if !options.top_n_is_valid() {
        return Err(ScanError::InvalidArgument(format!(
            "top_n must be between {} and {}, got {}",
            MIN_TOP_N, MAX_TOP_N, options.top_n
        )));
    }
    ensure_exists(root)?;

    tracing::debug!(
        root = %root.display(),
        top_n = options.top_n,
        extension = ?options.extension,
        "Scanning for largest files"
    );

    let mut top = TopKSet::new(options.top_n);
    let mut stats = ScanStats::default();

    for result in walk(root, options.include_hidden) {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                stats.record_error(path, err.to_string());
                continue;
            }
        };

        if entry.file_type().is_dir() {
            if options.is_cancelled() {
                tracing::info!(files = stats.files_scanned, "Scan cancelled");
                return Err(ScanError::Cancelled {
                    partial: Box::new(ScanResult {
                        entries: top.into_sorted_vec(),
                        stats,
                    }),
                });
            }
            continue;
        }

        if !options.matches_extension(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let path = entry.path();

        // Follows a trailing symlink, so dangling links surface as errors
        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(err) => {
                stats.record_error(path.to_path_buf(), err.to_string());
                continue;
            }
        };

        if !metadata.is_file() {
            continue;
        }

        top.offer(FileEntry::new(
            metadata.len(),
            path.to_path_buf(),
            metadata.modified().ok(),
        ));
        stats.files_scanned += 1;

        if stats.files_scanned % PROGRESS_INTERVAL == 0 {
            if let Some(sink) = progress.as_deref_mut() {
                sink.on_progress(stats.files_scanned, path.parent().unwrap_or(root));
            }
        }
    }

    tracing::debug!(
        files = stats.files_scanned,
        errors = stats.error_count,
        "Scan complete"
    );

    Ok(ScanResult {
        entries: top.into_sorted_vec(),
        stats,
    })
}

/// Total size, file and directory counts for the tree below `root`.
///
/// Full traversal independent of any top-K bound: hidden files and
/// directories are counted too. Access failures are recorded in the returned
/// stats, like the main scan.
pub fn directory_stats(root: &Path) -> Result<DirectoryStats> {
    ensure_exists(root)?;

    tracing::debug!(root = %root.display(), "Collecting directory stats");

    let mut stats = DirectoryStats::default();

    for result in walk(root, true) {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                stats.record_error(path, err.to_string());
                continue;
            }
        };

        if entry.file_type().is_dir() {
            if entry.depth() > 0 {
                stats.directory_count += 1;
            }
            continue;
        }

        match fs::metadata(entry.path()) {
            Ok(m) if m.is_file() => stats.add_file(m.len()),
            Ok(_) => {}
            Err(err) => stats.record_error(entry.path().to_path_buf(), err.to_string()),
        }
    }

    stats.finish();
    Ok(stats)
}

fn ensure_exists(root: &Path) -> Result<()> {
    match root.try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => Err(ScanError::PathNotFound(root.to_path_buf())),
        Err(e) => Err(ScanError::Io {
            path: root.to_path_buf(),
            source: e,
        }),
    }
}

/// Walker that never follows directory symlinks and prunes hidden entries
/// below the root unless asked not to.
fn walk(
    root: &Path,
    include_hidden: bool,
) -> walkdir::FilterEntry<IntoIter, impl FnMut(&walkdir::DirEntry) -> bool> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |e| include_hidden || e.depth() == 0 || !is_hidden(e.path()))
}
