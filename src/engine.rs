//! The filter-and-aggregate pipeline.
//!
//! Every on-screen view (record table, stat cards, chart datasets) derives
//! from one source collection and the current filter criteria. The pipeline
//! is pure and synchronous: each criteria or collection change recomputes
//! everything from scratch, there is no incremental update.

use crate::models::record::{FilterCriteria, Severity, VulnerabilityRecord};

/// Frequency counts keyed by a categorical value.
///
/// Keys appear in first-seen order while scanning the subset front-to-back.
/// This ordering is part of the contract: chart consumers rely on stable
/// bucket order across re-renders with unchanged input, so the bucket is a
/// vector of pairs rather than a hash map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregationBucket {
    entries: Vec<(String, usize)>,
}

impl AggregationBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the count for `key`, inserting it at the end on first
    /// occurrence.
    pub fn increment(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key.to_string(), 1)),
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map_or(0, |(_, count)| *count)
    }

    /// Entries in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, count)| (k.as_str(), *count))
    }

    /// Sum of all counts. Equals the length of the subset the bucket was
    /// aggregated from.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the records matching all of the criteria, preserving the
/// collection's relative order.
///
/// A record is included iff the search term is empty or a case-insensitive
/// substring of its id, description, or product, AND each categorical
/// selector is "all" or exactly equal to the corresponding field.
pub fn filter(
    collection: &[VulnerabilityRecord],
    criteria: &FilterCriteria,
) -> Vec<VulnerabilityRecord> {
    let needle = criteria.search_term.to_lowercase();

    collection
        .iter()
        .filter(|record| {
            let matches_search = needle.is_empty()
                || record.id.to_lowercase().contains(&needle)
                || record.description.to_lowercase().contains(&needle)
                || record.product.to_lowercase().contains(&needle);

            matches_search
                && criteria.corporation.matches(&record.corporation)
                && criteria.language.matches(&record.language)
                && criteria.protocol.matches(&record.protocol)
        })
        .cloned()
        .collect()
}

/// Counts occurrences of each categorical key over the subset in one
/// in-order scan.
///
/// Calling this twice with the same subset and extractor yields identical
/// buckets: same keys, same counts, same order.
pub fn aggregate<'a, F>(subset: &'a [VulnerabilityRecord], key_extractor: F) -> AggregationBucket
where
    F: Fn(&'a VulnerabilityRecord) -> &'a str,
{
    let mut bucket = AggregationBucket::new();
    for record in subset {
        bucket.increment(key_extractor(record));
    }
    bucket
}

/// The distinct values of one categorical field across a collection, in
/// first-seen order. Powers the "available filter values" report the way
/// the dashboard populates its selector dropdowns.
pub fn distinct_values<'a, F>(collection: &'a [VulnerabilityRecord], extractor: F) -> Vec<String>
where
    F: Fn(&'a VulnerabilityRecord) -> &'a str,
{
    let mut values: Vec<String> = Vec::new();
    for record in collection {
        let value = extractor(record);
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

/// Headline numbers derived from the filtered subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryStats {
    pub total: usize,
    pub critical: usize,
    pub validated: usize,
    pub distinct_protocols: usize,
}

impl SummaryStats {
    pub fn compute(subset: &[VulnerabilityRecord]) -> Self {
        SummaryStats {
            total: subset.len(),
            critical: subset
                .iter()
                .filter(|r| r.severity == Severity::Critical)
                .count(),
            validated: subset.iter().filter(|r| r.validated).count(),
            distinct_protocols: distinct_values(subset, |r| &r.protocol).len(),
        }
    }
}

/// One full pipeline pass: the filtered subset plus everything derived from
/// it. Presentation consumers read this and never mutate it.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub subset: Vec<VulnerabilityRecord>,
    pub by_corporation: AggregationBucket,
    pub by_language: AggregationBucket,
    pub by_protocol: AggregationBucket,
    pub by_recurrence_type: AggregationBucket,
    pub by_severity: AggregationBucket,
    pub stats: SummaryStats,
}

impl DashboardData {
    pub fn compute(collection: &[VulnerabilityRecord], criteria: &FilterCriteria) -> Self {
        let subset = filter(collection, criteria);

        let by_corporation = aggregate(&subset, |r| &r.corporation);
        let by_language = aggregate(&subset, |r| &r.language);
        let by_protocol = aggregate(&subset, |r| &r.protocol);
        let by_recurrence_type = aggregate(&subset, |r| &r.recurrence_type);
        let by_severity = aggregate(&subset, |r| r.severity.as_str());
        let stats = SummaryStats::compute(&subset);

        DashboardData {
            subset,
            by_corporation,
            by_language,
            by_protocol,
            by_recurrence_type,
            by_severity,
            stats,
        }
    }
}
