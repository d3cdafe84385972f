use super::severity::SeverityRank;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One finding extracted from a report line. Equality and hashing cover
/// every field, so the parser's accumulator collapses repeated lines to a
/// single record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VulnerabilityRecord {
    pub component: String,
    pub severity_label: String,
    pub severity_rank: SeverityRank,
    pub vulnerability_type: String,
    pub advisory_url: String,
}

/// Order the deduplicated findings for rendering: severity rank descending,
/// then component name ascending. The sort is stable, so records that tie
/// on both keys (same rank and component, different type or URL) keep a
/// consistent relative order.
pub fn sorted_by_severity(records: HashSet<VulnerabilityRecord>) -> Vec<VulnerabilityRecord> {
    let mut sorted: Vec<VulnerabilityRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| {
        b.severity_rank
            .cmp(&a.severity_rank)
            .then_with(|| a.component.cmp(&b.component))
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(component: &str, label: &str, url: &str) -> VulnerabilityRecord {
        VulnerabilityRecord {
            component: component.to_string(),
            severity_label: label.to_string(),
            severity_rank: SeverityRank::from_label(label),
            vulnerability_type: "Prototype Pollution".to_string(),
            advisory_url: url.to_string(),
        }
    }

    #[test]
    fn test_sorted_by_rank_then_component() {
        let records: HashSet<VulnerabilityRecord> = [
            record("lodash", "High", "https://example.com/1"),
            record("left-pad", "Critical", "https://example.com/2"),
            record("axios", "High", "https://example.com/3"),
            record("minimist", "unknown-level", "https://example.com/4"),
        ]
        .into_iter()
        .collect();

        let sorted = sorted_by_severity(records);
        let order: Vec<&str> = sorted.iter().map(|r| r.component.as_str()).collect();
        assert_eq!(order, vec!["left-pad", "axios", "lodash", "minimist"]);
    }

    #[test]
    fn test_adjacent_pairs_satisfy_composite_key() {
        let records: HashSet<VulnerabilityRecord> = [
            record("b", "low", "u1"),
            record("a", "low", "u2"),
            record("c", "critical", "u3"),
            record("a", "moderate", "u4"),
        ]
        .into_iter()
        .collect();

        let sorted = sorted_by_severity(records);
        for pair in sorted.windows(2) {
            let (r1, r2) = (&pair[0], &pair[1]);
            assert!(
                r1.severity_rank > r2.severity_rank
                    || (r1.severity_rank == r2.severity_rank && r1.component <= r2.component)
            );
        }
    }

    #[test]
    fn test_set_collapses_identical_records() {
        let mut records = HashSet::new();
        records.insert(record("lodash", "High", "https://example.com/1"));
        records.insert(record("lodash", "High", "https://example.com/1"));
        assert_eq!(records.len(), 1);

        // Same rank and component, different URL: both survive.
        records.insert(record("lodash", "High", "https://example.com/9"));
        assert_eq!(sorted_by_severity(records).len(), 2);
    }
}
