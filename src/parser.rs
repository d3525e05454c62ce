use crate::models::record::VulnerabilityRecord;
use std::{fs, path::Path, process};

/// Loads a JSON array of vulnerability records from disk.
///
/// Exits the process with an error message if the file is missing, cannot
/// be read, or does not parse as a record array. This runs at the CLI
/// boundary before anything else, so a hard exit is the right failure mode.
pub fn parse_records_file(path: &Path) -> Vec<VulnerabilityRecord> {
    if !path.exists() || !path.is_file() {
        eprintln!(
            "File '{}' doesn't exist or is not a valid file, aborting",
            path.to_string_lossy()
        );
        process::exit(1);
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!(
                "Failed to read records file '{}': {}",
                path.to_string_lossy(),
                e
            );
            process::exit(1);
        }
    };

    match serde_json::from_str(&content) {
        Ok(records) => records,
        Err(e) => {
            eprintln!(
                "Failed to parse records file '{}' as a JSON record array: {}",
                path.to_string_lossy(),
                e
            );
            process::exit(1);
        }
    }
}
