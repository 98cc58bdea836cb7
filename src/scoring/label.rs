// Risk label: maps a score in [0, 1] to one of four severity buckets.

use serde::{Serialize, Serializer};

/// Severity bucket for a boycott risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    Clear,
    Low,
    Medium,
    High,
}

/// Left-closed lower bounds, highest first. Anything below the last bound
/// (including NaN) is `RiskLabel::Clear`.
pub const LABEL_THRESHOLDS: &[(f64, RiskLabel)] = &[
    (0.75, RiskLabel::High),
    (0.5, RiskLabel::Medium),
    (0.25, RiskLabel::Low),
];

impl RiskLabel {
    pub fn from_score(score: f64) -> Self {
        LABEL_THRESHOLDS
            .iter()
            .find(|(bound, _)| score >= *bound)
            .map_or(RiskLabel::Clear, |(_, label)| *label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Clear => "No clear boycott signals detected",
            RiskLabel::Low => "Low boycott risk",
            RiskLabel::Medium => "Medium boycott risk",
            RiskLabel::High => "High boycott risk - possible boycott in this group",
        }
    }

    /// Every label, lowest severity first.
    pub fn all() -> [RiskLabel; 4] {
        [RiskLabel::Clear, RiskLabel::Low, RiskLabel::Medium, RiskLabel::High]
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Serialized as the human-readable label so JSON consumers get the same
// strings the terminal report shows.
impl Serialize for RiskLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(RiskLabel::from_score(0.0), RiskLabel::Clear);
        assert_eq!(RiskLabel::from_score(0.249), RiskLabel::Clear);
        assert_eq!(RiskLabel::from_score(0.25), RiskLabel::Low);
        assert_eq!(RiskLabel::from_score(0.499), RiskLabel::Low);
        assert_eq!(RiskLabel::from_score(0.5), RiskLabel::Medium);
        assert_eq!(RiskLabel::from_score(0.749), RiskLabel::Medium);
        assert_eq!(RiskLabel::from_score(0.75), RiskLabel::High);
        assert_eq!(RiskLabel::from_score(1.0), RiskLabel::High);
    }

    #[test]
    fn test_nan_falls_to_none() {
        assert_eq!(RiskLabel::from_score(f64::NAN), RiskLabel::Clear);
    }

    #[test]
    fn test_serializes_as_label_text() {
        let json = serde_json::to_string(&RiskLabel::Medium).unwrap();
        assert_eq!(json, "\"Medium boycott risk\"");
    }
}
