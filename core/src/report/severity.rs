use serde::{Deserialize, Serialize};

/// Ordinal severity bucket derived from a report's free-text severity
/// label. The derived `Ord` follows the discriminants, so `Critical` sorts
/// above `High` and `Unknown` sorts below everything.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum SeverityRank {
    Unknown = 0,
    Low = 1,
    Moderate = 2,
    High = 3,
    Critical = 4,
}

impl SeverityRank {
    /// Case-insensitive substring match against the label, most severe
    /// keyword first. A label naming several levels resolves to the
    /// highest one because the first match wins.
    pub fn from_label(label: &str) -> Self {
        let lowered = label.to_lowercase();
        if lowered.contains("critical") {
            return Self::Critical;
        }
        if lowered.contains("high") {
            return Self::High;
        }
        if lowered.contains("medium") || lowered.contains("moderate") {
            return Self::Moderate;
        }
        if lowered.contains("low") {
            return Self::Low;
        }
        Self::Unknown
    }

    pub fn as_ordinal(&self) -> u8 {
        *self as u8
    }
}
