use serde::Serialize;

use crate::scanner::{DirectoryStats, FileAccessError, FileEntry};

use super::size::{format_bytes, format_size};

/// Paths longer than this are shortened in listings.
pub const MAX_PATH_WIDTH: usize = 60;

const RULE_WIDTH: usize = 80;

/// Shorten `path` to [`MAX_PATH_WIDTH`] characters, keeping its tail.
pub fn truncate_path(path: &str) -> String {
    let len = path.chars().count();
    if len <= MAX_PATH_WIDTH {
        return path.to_string();
    }

    let keep = MAX_PATH_WIDTH - 3;
    let tail: String = path.chars().skip(len - keep).collect();
    format!("...{}", tail)
}

/// Format entries as a ranked listing, largest first.
pub fn format_results(entries: &[FileEntry]) -> String {
    if entries.is_empty() {
        return "No files found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Largest Files:\n");
    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push('\n');

    for (idx, entry) in entries.iter().enumerate() {
        let path = entry.path.to_string_lossy();
        output.push_str(&format!(
            "{:2}. {:>12} - {}\n",
            idx + 1,
            format_size(entry.size),
            truncate_path(&path)
        ));
    }

    output
}

/// Print the ranked listing to stdout.
pub fn print_results(entries: &[FileEntry]) {
    print!("{}", format_results(entries));
}

/// Summary line for access failures, or an empty string when there were none.
///
/// With `verbose`, every failed path is listed below the summary.
pub fn format_error_summary(errors: &[FileAccessError], verbose: bool) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let noun = if errors.len() == 1 { "file" } else { "files" };
    let mut output = format!("{} {} could not be accessed\n", errors.len(), noun);

    if verbose {
        for err in errors {
            output.push_str(&format!("  {}: {}\n", err.path.display(), err.message));
        }
    }

    output
}

/// Format directory statistics as an indented block.
pub fn format_stats(stats: &DirectoryStats) -> String {
    let mut output = String::new();
    output.push_str("Directory Statistics:\n");
    output.push_str(&format!("   Total size: {}\n", format_size(stats.total_size)));
    output.push_str(&format!("   Files: {}\n", stats.file_count));
    output.push_str(&format!("   Directories: {}\n", stats.directory_count));
    output.push_str(&format!(
        "   Average file size: {}\n",
        format_bytes(stats.average_file_size)
    ));
    output
}

/// Format any report value as JSON
pub fn format_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
