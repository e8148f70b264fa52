mod export;
mod formatter;
mod size;

pub use export::{export_csv, write_csv, CSV_HEADERS};
pub use formatter::{
    format_error_summary, format_json, format_results, format_stats, print_results,
    truncate_path, MAX_PATH_WIDTH,
};
pub use size::{format_bytes, format_size};
