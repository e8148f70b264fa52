//! bigfiles - Find the largest files in a directory tree
//!
//! This crate provides functionality for:
//! - Bounded top-K selection of the largest files below a root directory
//! - Whole-tree size and file count statistics
//! - Human-readable, JSON and CSV reporting of the results

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ScanError};
pub use scanner::{directory_stats, find_largest_files, FileEntry, ScanOptions, ScanResult};
