//! Non-rejecting collection lint.
//!
//! The store accepts whatever it is given; this pass only surfaces what
//! looks wrong so the degradation is visible. Nothing here removes or
//! rewrites a record.

use crate::models::record::VulnerabilityRecord;
use regex::Regex;

/// Findings from linting a collection. Counts are per-record occurrences.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub duplicate_ids: Vec<String>,
    pub out_of_range_scores: Vec<String>,
    pub malformed_ids: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty()
            && self.out_of_range_scores.is_empty()
            && self.malformed_ids.is_empty()
    }
}

/// Checks a collection for duplicate ids, scores outside [0.0, 10.0], and
/// ids that don't look like `CVE-YYYY-NNNN`.
pub fn validate_collection(collection: &[VulnerabilityRecord]) -> ValidationReport {
    let id_shape = Regex::new(r"^CVE-\d{4}-\d{4,}$").expect("Invalid regex pattern");
    let mut report = ValidationReport::default();
    let mut seen: Vec<&str> = Vec::new();

    for record in collection {
        if seen.contains(&record.id.as_str()) {
            if !report.duplicate_ids.contains(&record.id) {
                report.duplicate_ids.push(record.id.clone());
            }
        } else {
            seen.push(&record.id);
        }

        if !(0.0..=10.0).contains(&record.score) {
            report.out_of_range_scores.push(record.id.clone());
        }

        if !id_shape.is_match(&record.id) {
            report.malformed_ids.push(record.id.clone());
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::validate_collection;
    use crate::sample::sample_records;

    #[test]
    fn sample_collection_is_clean() {
        assert!(validate_collection(&sample_records()).is_clean());
    }

    #[test]
    fn duplicate_ids_are_reported_once() {
        let mut collection = sample_records();
        let dup = collection[0].clone();
        collection.push(dup.clone());
        collection.push(dup);

        let report = validate_collection(&collection);
        assert_eq!(report.duplicate_ids, vec!["CVE-2024-0001".to_string()]);
    }

    #[test]
    fn out_of_range_scores_and_bad_ids_are_flagged() {
        let mut collection = sample_records();
        collection[1].score = 11.3;
        collection[2].id = "GHSA-xxxx-yyyy".to_string();

        let report = validate_collection(&collection);
        assert_eq!(report.out_of_range_scores, vec!["CVE-2024-0002".to_string()]);
        assert_eq!(report.malformed_ids, vec!["GHSA-xxxx-yyyy".to_string()]);
        assert!(!report.is_clean());
    }
}
