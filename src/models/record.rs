use super::serde_helpers::parse_published_date;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// One known vulnerability entry, as loaded from the record file or the
/// built-in sample set. Immutable once loaded.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VulnerabilityRecord {
    pub id: String,

    #[serde(default)]
    pub corporation: String,

    #[serde(default)]
    pub product: String,

    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub protocol: String,

    pub severity: Severity,

    pub score: f64,

    #[serde(default)]
    pub description: String,

    #[serde(deserialize_with = "parse_published_date")]
    pub published: NaiveDate,

    #[serde(rename(deserialize = "recurrenceType"), default)]
    pub recurrence_type: String,

    #[serde(default)]
    pub validated: bool,
}

/// Categorical risk level of a vulnerability.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorical filter value: either the "all" sentinel (match any record)
/// or one specific value that must match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    /// Parses a selector from user input. The literal string "all" is the
    /// match-any sentinel; anything else selects that exact value.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Selector::All
        } else {
            Selector::Only(value.to_string())
        }
    }

    /// True when this selector accepts the given field value.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("all"),
            Selector::Only(value) => f.write_str(value),
        }
    }
}

/// Current query state. Mutated only through [`crate::store::RecordStore`]
/// setters; the pipeline reads it and never changes it.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Free-text search. Empty means "match all".
    pub search_term: String,
    pub corporation: Selector,
    pub language: Selector,
    pub protocol: Selector,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_all_matches_anything() {
        let selector = Selector::parse("all");
        assert_eq!(selector, Selector::All);
        assert!(selector.matches("Apache"));
        assert!(selector.matches(""));
    }

    #[test]
    fn selector_only_requires_exact_match() {
        let selector = Selector::parse("Cisco");
        assert!(selector.matches("Cisco"));
        assert!(!selector.matches("cisco"));
        assert!(!selector.matches("Cisco Systems"));
    }

    #[test]
    fn severity_deserializes_from_exact_names() {
        let severity: Severity = serde_json::from_str("\"Critical\"").unwrap();
        assert_eq!(severity, Severity::Critical);
        assert!(serde_json::from_str::<Severity>("\"critical\"").is_err());
    }

    #[test]
    fn record_deserializes_with_camel_case_recurrence_type() {
        let json = r#"{
            "id": "CVE-2024-0001",
            "corporation": "Apache",
            "product": "HTTP Server",
            "language": "C",
            "protocol": "HTTP",
            "severity": "High",
            "score": 8.5,
            "description": "DDoS vulnerability in Apache HTTP Server allowing resource exhaustion",
            "published": "2024-01-15",
            "recurrenceType": "Resource Exhaustion",
            "validated": true
        }"#;

        let record: VulnerabilityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.recurrence_type, "Resource Exhaustion");
        assert_eq!(record.severity, Severity::High);
        assert_eq!(
            record.published,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn missing_string_fields_default_to_empty() {
        let json = r#"{
            "id": "CVE-2024-9999",
            "severity": "Low",
            "score": 1.0,
            "published": "2024-06-01"
        }"#;

        let record: VulnerabilityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.corporation, "");
        assert!(!record.validated);
        // An absent field can never satisfy a specific selector.
        assert!(!Selector::parse("Apache").matches(&record.corporation));
    }
}
