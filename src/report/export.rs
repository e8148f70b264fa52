//! CSV export of scan results.

use chrono::{DateTime, Local};
use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::scanner::FileEntry;

use super::size::format_size;

/// Column headers of the exported file.
pub const CSV_HEADERS: [&str; 5] = ["Size (Bytes)", "Size (human)", "Name", "Location", "Modified"];

/// Write entries as CSV to any writer.
pub fn write_csv<W: io::Write>(entries: &[FileEntry], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;

    for entry in entries {
        wtr.write_record(&[
            entry.size.to_string(),
            format_size(entry.size),
            entry.name(),
            entry.location().display().to_string(),
            format_modified(entry.modified),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write entries as CSV to a file, replacing it if present.
pub fn export_csv(entries: &[FileEntry], path: &Path) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_csv(entries, file)?;
    tracing::info!(path = %path.display(), rows = entries.len(), "Exported CSV");
    Ok(())
}

fn format_modified(modified: Option<SystemTime>) -> String {
    match modified {
        Some(t) => DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M").to_string(),
        None => "Unknown".to_string(),
    }
}
