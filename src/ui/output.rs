//! Output and reporting functions for the dashboard.
//!
//! This module handles all console output, including:
//! - Load summary and active filters
//! - Validation warnings
//! - Summary stat cards
//! - Aggregation bucket tables
//! - The filtered record table
//! - Export confirmation

use crate::engine::{AggregationBucket, DashboardData, SummaryStats, distinct_values};
use crate::models::record::{FilterCriteria, VulnerabilityRecord};
use crate::validate::ValidationReport;

/// Prints the load summary with the record count and data source.
pub fn print_load_summary(record_count: usize, source: &str) {
    println!(
        "🔄 Records loaded from {}!\n\t🔎 Found {} vulnerability records",
        source, record_count
    );
}

/// Prints the active filter criteria.
pub fn print_active_filters(criteria: &FilterCriteria) {
    let search = if criteria.search_term.is_empty() {
        "(none)".to_string()
    } else {
        format!("'{}'", criteria.search_term)
    };
    println!(
        "🔧 Active filters: search {}, corporation '{}', language '{}', protocol '{}'",
        search, criteria.corporation, criteria.language, criteria.protocol
    );
}

/// Prints warnings for anything the collection lint flagged. Nothing is
/// rejected; these records stay in every view.
pub fn print_validation_warnings(report: &ValidationReport) {
    if report.is_clean() {
        return;
    }

    if !report.duplicate_ids.is_empty() {
        println!(
            "⚠️  Duplicate record ids found: {}",
            report.duplicate_ids.len()
        );
        for id in &report.duplicate_ids {
            println!("\t- {}", id);
        }
    }

    if !report.out_of_range_scores.is_empty() {
        println!(
            "⚠️  Records with scores outside [0.0, 10.0]: {}",
            report.out_of_range_scores.len()
        );
        for id in &report.out_of_range_scores {
            println!("\t- {}", id);
        }
    }

    if !report.malformed_ids.is_empty() {
        println!(
            "⚠️  Record ids not shaped like CVE-YYYY-NNNN: {}",
            report.malformed_ids.len()
        );
        for id in &report.malformed_ids {
            println!("\t- {}", id);
        }
    }
}

/// Prints the four summary stat cards.
pub fn print_summary_stats(stats: &SummaryStats) {
    println!("\n📊 Summary");
    println!("\t🔢 Total CVEs: {}", stats.total);
    println!("\t🚨 Critical: {}", stats.critical);
    println!("\t✅ Validated: {}", stats.validated);
    println!("\t🌐 Protocols: {}", stats.distinct_protocols);
}

/// Prints one aggregation bucket as a titled count table.
pub fn print_bucket(title: &str, bucket: &AggregationBucket) {
    println!("\n📈 {}", title);
    if bucket.is_empty() {
        println!("\t(no records)");
        return;
    }
    for (key, count) in bucket.iter() {
        println!("\t{:<24} {}", key, count);
    }
}

/// Prints the filtered record table.
pub fn print_record_table(subset: &[VulnerabilityRecord]) {
    println!("\n📋 Matching records: {}", subset.len());
    if subset.is_empty() {
        println!("\t(no records match the current filters)");
        return;
    }

    for record in subset {
        println!(
            "\t{}  {:<10} {:<16} {:<8} {:>4.1}  {}",
            record.id,
            record.corporation,
            record.product,
            record.severity,
            record.score,
            if record.validated { "✅" } else { "⏳" }
        );
    }
}

/// Prints the distinct values available for each selector, the way the
/// dashboard populates its filter dropdowns from the full collection.
pub fn print_available_filters(collection: &[VulnerabilityRecord]) {
    println!("\n🔍 Available filter values");
    println!(
        "\tCorporations: {}",
        distinct_values(collection, |r| &r.corporation).join(", ")
    );
    println!(
        "\tLanguages: {}",
        distinct_values(collection, |r| &r.language).join(", ")
    );
    println!(
        "\tProtocols: {}",
        distinct_values(collection, |r| &r.protocol).join(", ")
    );
}

/// Prints a confirmation after a successful CSV export.
pub fn print_export_confirmation(path: &std::path::Path, record_count: usize) {
    println!(
        "\n💾 Exported {} records to '{}'",
        record_count,
        path.display()
    );
}

/// Prints the complete dashboard report.
///
/// This orchestrates all report sections:
/// 1. Summary stat cards
/// 2. The five aggregation tables
/// 3. The filtered record table
pub fn print_dashboard(data: &DashboardData) {
    print_summary_stats(&data.stats);

    print_bucket("CVEs by corporation", &data.by_corporation);
    print_bucket("CVEs by language", &data.by_language);
    print_bucket("CVEs by protocol", &data.by_protocol);
    print_bucket("CVEs by recurrence type", &data.by_recurrence_type);
    print_bucket("CVEs by severity", &data.by_severity);

    print_record_table(&data.subset);
}
