use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// bigfiles - Find the largest files in a directory tree
#[derive(Parser, Debug)]
#[command(name = "bigfiles")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "BIGFILES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the largest files below a directory
    Largest(LargestArgs),

    /// Show size and file count statistics for a directory
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct LargestArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Number of files to show (1-100)
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Only consider file names ending with this suffix (e.g. .pdf)
    #[arg(short, long, value_name = "SUFFIX")]
    pub ext: Option<String>,

    /// Include hidden files and directories
    #[arg(short, long)]
    pub all: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the results to a CSV file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// List every path that could not be accessed
    #[arg(long)]
    pub show_errors: bool,

    /// Don't show the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Directory to analyze (hidden entries included)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// List every path that could not be accessed
    #[arg(long)]
    pub show_errors: bool,
}
