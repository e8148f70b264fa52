//! Directory statistics command implementation

use anyhow::Result;

use crate::cli::StatsArgs;
use crate::config::Config;
use crate::report::{format_error_summary, format_json, format_stats};
use crate::scanner::directory_stats;

/// Run the stats command
pub fn run(args: StatsArgs, config: &Config) -> Result<()> {
    tracing::info!(path = %args.path.display(), "Collecting directory statistics");

    let stats = directory_stats(&args.path)?;

    if args.json {
        println!("{}", format_json(&stats, true)?);
        return Ok(());
    }

    print!("{}", format_stats(&stats));

    let show_errors = args.show_errors || config.report.show_errors;
    let summary = format_error_summary(&stats.errors, show_errors);
    if !summary.is_empty() {
        println!();
        print!("{}", summary);
    }

    Ok(())
}
