use super::model::VulnerabilityRecord;
use super::severity::SeverityRank;
use crate::error::{CoreError, CoreResult};
use regex::Regex;
use std::collections::HashSet;
use std::io::BufRead;

/// A line must split into at least this many fields to count as a record.
const MIN_FIELDS: usize = 6;

/// Read a report line by line and accumulate the unique findings. Lines
/// that do not match the record shape (blank lines, headers, footers) are
/// dropped without comment; only I/O failures surface as errors.
pub fn parse_report<R: BufRead>(reader: R) -> CoreResult<HashSet<VulnerabilityRecord>> {
    let field_split = Regex::new(r"\t+")
        .map_err(|_e| CoreError::InvalidInput("Regex compilation failed".to_string()))?;

    let mut records = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(record) = parse_line(&field_split, &line) {
            records.insert(record);
        }
    }
    Ok(records)
}

/// Split on runs of tabs after stripping trailing tabs. A leading tab
/// yields a leading empty field that still occupies index 0, so the field
/// positions below stay aligned with the scanner layout: index 1 is the
/// component, 2 the severity label, 4 the vulnerability type, 5 the
/// advisory URL. Indices 0 and 3 are present in the layout but never
/// rendered.
fn parse_line(field_split: &Regex, line: &str) -> Option<VulnerabilityRecord> {
    let trimmed = line.trim_end_matches('\t');
    let fields: Vec<&str> = field_split.split(trimmed).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let severity_label = fields[2].to_string();
    let severity_rank = SeverityRank::from_label(&severity_label);
    Some(VulnerabilityRecord {
        component: fields[1].to_string(),
        severity_label,
        severity_rank,
        vulnerability_type: fields[4].to_string(),
        advisory_url: fields[5].to_string(),
    })
}
