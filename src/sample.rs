//! The built-in sample record set.
//!
//! Used when no record file is supplied, and as the replacement collection
//! for the refresh operation. In a full deployment this collection would
//! come from a CVE feed; pulling one is out of scope here, so the loader
//! boundary hands back this canned data instead.

use crate::models::record::{Severity, VulnerabilityRecord};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid")
}

/// Five DDoS-related CVE entries covering every selector dimension.
pub fn sample_records() -> Vec<VulnerabilityRecord> {
    vec![
        VulnerabilityRecord {
            id: "CVE-2024-0001".to_string(),
            corporation: "Apache".to_string(),
            product: "HTTP Server".to_string(),
            language: "C".to_string(),
            protocol: "HTTP".to_string(),
            severity: Severity::High,
            score: 8.5,
            description: "DDoS vulnerability in Apache HTTP Server allowing resource exhaustion"
                .to_string(),
            published: date(2024, 1, 15),
            recurrence_type: "Resource Exhaustion".to_string(),
            validated: true,
        },
        VulnerabilityRecord {
            id: "CVE-2024-0002".to_string(),
            corporation: "Nginx".to_string(),
            product: "Web Server".to_string(),
            language: "C".to_string(),
            protocol: "HTTP".to_string(),
            severity: Severity::Medium,
            score: 6.8,
            description: "Memory leak in Nginx leading to potential DDoS".to_string(),
            published: date(2024, 2, 10),
            recurrence_type: "Memory Leak".to_string(),
            validated: true,
        },
        VulnerabilityRecord {
            id: "CVE-2024-0003".to_string(),
            corporation: "Microsoft".to_string(),
            product: "IIS".to_string(),
            language: "C++".to_string(),
            protocol: "HTTP".to_string(),
            severity: Severity::High,
            score: 7.9,
            description: "Buffer overflow in IIS causing service disruption".to_string(),
            published: date(2024, 3, 5),
            recurrence_type: "Buffer Overflow".to_string(),
            validated: false,
        },
        VulnerabilityRecord {
            id: "CVE-2024-0004".to_string(),
            corporation: "Cisco".to_string(),
            product: "Router Firmware".to_string(),
            language: "C".to_string(),
            protocol: "TCP".to_string(),
            severity: Severity::Critical,
            score: 9.2,
            description: "TCP flood vulnerability in Cisco router firmware".to_string(),
            published: date(2024, 1, 28),
            recurrence_type: "Protocol Flood".to_string(),
            validated: true,
        },
        VulnerabilityRecord {
            id: "CVE-2024-0005".to_string(),
            corporation: "Oracle".to_string(),
            product: "Database".to_string(),
            language: "Java".to_string(),
            protocol: "TCP".to_string(),
            severity: Severity::Medium,
            score: 5.5,
            description: "Connection exhaustion in Oracle Database".to_string(),
            published: date(2024, 2, 20),
            recurrence_type: "Resource Exhaustion".to_string(),
            validated: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::sample_records;

    #[test]
    fn sample_has_five_unique_ids() {
        let records = sample_records();
        assert_eq!(records.len(), 5);

        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn sample_scores_are_within_bounds() {
        for record in sample_records() {
            assert!((0.0..=10.0).contains(&record.score), "{}", record.id);
        }
    }
}
