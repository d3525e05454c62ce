//! Command-line interface module.
//!
//! This module handles all CLI argument parsing and related utilities for
//! the CVE dashboard.

use crate::models::record::{FilterCriteria, Selector};
use clap::Parser;
use std::{path::PathBuf, process};

/// CLI arguments for the CVE dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON file containing an array of vulnerability records.
    /// If not provided, the built-in sample set is used.
    #[arg(short = 'f', long = "records-file")]
    pub records_file: Option<String>,

    /// Free-text search over CVE id, description, and product
    /// (case-insensitive substring match)
    #[arg(short = 's', long = "search", default_value = "")]
    pub search: String,

    /// Filter by corporation, or "all"
    #[arg(short = 'c', long = "corporation", default_value = "all")]
    pub corporation: String,

    /// Filter by implementation language, or "all"
    #[arg(short = 'l', long = "language", default_value = "all")]
    pub language: String,

    /// Filter by network protocol, or "all"
    #[arg(short = 'p', long = "protocol", default_value = "all")]
    pub protocol: String,

    /// Write the filtered records to this path as CSV
    #[arg(short = 'o', long = "export-csv")]
    pub export_csv: Option<PathBuf>,
}

impl Args {
    /// Builds the filter criteria from the parsed arguments.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.search.clone(),
            corporation: Selector::parse(&self.corporation),
            language: Selector::parse(&self.language),
            protocol: Selector::parse(&self.protocol),
        }
    }
}

/// Resolves the records file path from CLI arguments.
///
/// Returns `None` when no file was given (the caller falls back to the
/// built-in sample set). If a path is provided but doesn't exist, the
/// program exits with an error.
pub fn resolve_records_file(args: &Args) -> Option<PathBuf> {
    let file_path = args.records_file.as_ref()?;
    let path = PathBuf::from(file_path);
    if !path.exists() {
        eprintln!(
            "Error: The specified records file '{}' does not exist.",
            file_path
        );
        process::exit(1);
    }
    println!("📂 Using records file: {}", path.display());
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::Args;
    use crate::models::record::Selector;
    use clap::Parser;

    #[test]
    fn defaults_match_everything() {
        let args = Args::parse_from(["cve_dashboard"]);
        let criteria = args.criteria();
        assert_eq!(criteria.search_term, "");
        assert_eq!(criteria.corporation, Selector::All);
        assert_eq!(criteria.language, Selector::All);
        assert_eq!(criteria.protocol, Selector::All);
    }

    #[test]
    fn selector_args_become_specific_selectors() {
        let args = Args::parse_from([
            "cve_dashboard",
            "--search",
            "flood",
            "-c",
            "Cisco",
            "-p",
            "TCP",
        ]);
        let criteria = args.criteria();
        assert_eq!(criteria.search_term, "flood");
        assert_eq!(criteria.corporation, Selector::Only("Cisco".to_string()));
        assert_eq!(criteria.language, Selector::All);
        assert_eq!(criteria.protocol, Selector::Only("TCP".to_string()));
    }
}
