/// Format size in human-readable binary units with two decimals
pub fn format_size(bytes: u64) -> String {
    format_bytes(bytes as f64)
}

/// Same as [`format_size`] for fractional values such as averages
pub fn format_bytes(bytes: f64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    let mut size = bytes;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }

    format!("{:.2} PB", size)
}
