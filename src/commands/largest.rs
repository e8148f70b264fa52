//! Largest-files command implementation

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use crate::cli::LargestArgs;
use crate::config::Config;
use crate::report::{export_csv, format_error_summary, format_json, format_results};
use crate::scanner::{find_largest_files, ScanOptions};

/// Build scan options from CLI arguments, falling back to the config file.
pub fn scan_options(args: &LargestArgs, config: &Config) -> ScanOptions {
    let mut options = ScanOptions::new()
        .with_top_n(args.top.unwrap_or(config.scanner.top_n))
        .with_hidden(args.all || config.scanner.include_hidden);

    if let Some(ext) = args.ext.as_ref().or(config.scanner.extension.as_ref()) {
        options = options.with_extension(ext.clone());
    }

    options
}

/// Run the largest command
pub fn run(args: LargestArgs, config: &Config, quiet: bool) -> Result<()> {
    let options = scan_options(&args, config);

    tracing::info!(path = %args.path.display(), top_n = options.top_n, "Finding largest files");

    let spinner = if quiet || args.no_progress || args.json {
        ProgressBar::hidden()
    } else {
        new_spinner()
    };
    spinner.set_message(format!("Scanning {}", args.path.display()));

    let mut on_progress = |count: u64, dir: &Path| {
        spinner.set_message(format!("Scanned {} files... {}", count, dir.display()));
    };
    let result = find_largest_files(&args.path, &options, Some(&mut on_progress));
    spinner.finish_and_clear();
    let result = result?;

    if let Some(csv_path) = &args.csv {
        export_csv(&result.entries, csv_path)
            .with_context(|| format!("Failed to write CSV to {}", csv_path.display()))?;
    }

    if args.json {
        println!("{}", format_json(&result, true)?);
        return Ok(());
    }

    print!("{}", format_results(&result.entries));

    let show_errors = args.show_errors || config.report.show_errors;
    let summary = format_error_summary(&result.stats.errors, show_errors);
    if !summary.is_empty() {
        println!();
        print!("{}", summary);
    }

    if !quiet {
        println!();
        println!(
            "Scanned {} files, {} errors",
            result.stats.files_scanned, result.stats.error_count
        );
    }

    Ok(())
}

fn new_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;

    fn largest_args(argv: &[&str]) -> LargestArgs {
        let mut full = vec!["bigfiles", "largest"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Command::Largest(args) => args,
            _ => panic!("Expected Largest command"),
        }
    }

    #[test]
    fn test_options_from_config_defaults() {
        let mut config = Config::default();
        config.scanner.top_n = 42;
        config.scanner.extension = Some(".iso".to_string());

        let options = scan_options(&largest_args(&[]), &config);

        assert_eq!(options.top_n, 42);
        assert_eq!(options.extension.as_deref(), Some(".iso"));
        assert!(!options.include_hidden);
    }

    #[test]
    fn test_cli_flags_override_config() {
        let mut config = Config::default();
        config.scanner.top_n = 42;
        config.scanner.extension = Some(".iso".to_string());

        let options = scan_options(&largest_args(&["-n", "3", "-e", ".mkv", "-a"]), &config);

        assert_eq!(options.top_n, 3);
        assert_eq!(options.extension.as_deref(), Some(".mkv"));
        assert!(options.include_hidden);
    }
}
