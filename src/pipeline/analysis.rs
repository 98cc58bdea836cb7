// Full analysis of one chat export.
//
// Steps:
//   1. Parse the export into messages
//   2. Per-sender statistics
//   3. Risk score from keyword ratio + sender concentration
//   4. Severity label
//   5. Potential target from word frequency in flagged messages
//
// Everything here is pure except `analyze_from_path`, which does a single read.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::scoring::label::RiskLabel;
use crate::scoring::risk::{score_risk, RiskSignals, RiskWeights};
use crate::scoring::stats::{compute_sender_stats, SenderStats};
use crate::signals::vocabulary::Vocabulary;
use crate::target::{infer_target, TARGET_MENTION_LIMIT};
use crate::transcript::message::Message;
use crate::transcript::parser::parse_text;

/// Source label for exports passed in as text rather than read from a file.
pub const IN_MEMORY_SOURCE: &str = "in-memory-text";

/// Everything the analysis produces for one export, ready for JSON.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// File path, or "in-memory-text"
    pub source: String,
    pub label: RiskLabel,
    pub risk_signals: RiskSignals,
    pub per_sender_stats: BTreeMap<String, SenderStats>,
    pub potential_target: Option<String>,
    /// Top (word, count) pairs from flagged messages, most frequent first
    pub target_mentions: Vec<(String, usize)>,
}

/// Vocabulary and weights for a run. `Analyzer::default()` uses the
/// built-in phrase list and the 70/30 weighting.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    pub vocabulary: Vocabulary,
    pub weights: RiskWeights,
}

impl Analyzer {
    pub fn new(vocabulary: Vocabulary, weights: RiskWeights) -> Self {
        Self {
            vocabulary,
            weights,
        }
    }

    /// Run steps 2-5 over already-parsed messages.
    pub fn run(&self, messages: &[Message], source: &str) -> AnalysisResult {
        let stats = compute_sender_stats(messages, &self.vocabulary);
        let risk_signals = score_risk(messages, &stats, &self.vocabulary, &self.weights);
        let label = RiskLabel::from_score(risk_signals.risk_score);
        let target = infer_target(messages, &self.vocabulary);

        info!(
            source,
            messages = risk_signals.total_messages,
            signal_messages = risk_signals.signal_messages,
            senders = stats.len(),
            score = risk_signals.risk_score,
            label = label.as_str(),
            "Analysis complete"
        );

        AnalysisResult {
            source: source.to_string(),
            label,
            risk_signals,
            per_sender_stats: stats,
            target_mentions: target.top(TARGET_MENTION_LIMIT),
            potential_target: target.candidate,
        }
    }
}

/// Analyze raw export text with a custom analyzer.
pub fn analyze_with(raw_text: &str, source: &str, analyzer: &Analyzer) -> AnalysisResult {
    let messages = parse_text(raw_text);
    analyzer.run(&messages, source)
}

/// Analyze raw export text with the default vocabulary and weights.
pub fn analyze(raw_text: &str) -> AnalysisResult {
    analyze_with(raw_text, IN_MEMORY_SOURCE, &Analyzer::default())
}

/// Read an export file (UTF-8) and analyze it. `source` is set to the path.
pub fn analyze_from_path(path: impl AsRef<Path>) -> Result<AnalysisResult> {
    analyze_path_with(path.as_ref(), &Analyzer::default())
}

/// Path variant of [`analyze_with`].
pub fn analyze_path_with(path: &Path, analyzer: &Analyzer) -> Result<AnalysisResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read chat export {}", path.display()))?;
    Ok(analyze_with(
        &content,
        &path.display().to_string(),
        analyzer,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let result = analyze("");
        assert_eq!(result.source, IN_MEMORY_SOURCE);
        assert_eq!(result.label, RiskLabel::Clear);
        assert_eq!(result.risk_signals, RiskSignals::default());
        assert!(result.per_sender_stats.is_empty());
        assert!(result.potential_target.is_none());
        assert!(result.target_mentions.is_empty());
    }

    #[test]
    fn test_custom_analyzer() {
        let analyzer = Analyzer::new(Vocabulary::new(["exclude"]), RiskWeights::default());
        let text = "1/1/25, 10:00 - Maya: exclude Noam\n1/1/25, 10:01 - Maya: exclude Noam now";
        let result = analyze_with(text, "test", &analyzer);
        // All flagged, one sender: 0.7 + 0.3
        assert_eq!(result.risk_signals.risk_score, 1.0);
        assert_eq!(result.label, RiskLabel::High);
        assert_eq!(result.potential_target.as_deref(), Some("exclude"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("whatsafe-test-nonexistent/chat.txt");
        let err = analyze_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read chat export"));
    }
}
