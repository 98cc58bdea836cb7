// Combined boycott risk score.
//
// Two signals feed the score:
// - keyword_ratio: share of all messages that contain a boycott phrase
// - sender_concentration: share of those flagged messages sent by the single
//   most active flagging sender (1.0 = one person wrote all of them)
//
// score = clamp(0.7 * keyword_ratio + 0.3 * sender_concentration, 0, 1),
// rounded to 3 decimals. The 70/30 split is a tuning constant.

use std::collections::BTreeMap;

use serde::Serialize;

use super::stats::SenderStats;
use crate::signals::vocabulary::Vocabulary;
use crate::transcript::message::Message;

/// Weights for the linear risk formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskWeights {
    /// Weight of the keyword ratio (default 0.7)
    pub keyword_weight: f64,
    /// Weight of the sender concentration (default 0.3)
    pub concentration_weight: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            keyword_weight: 0.7,
            concentration_weight: 0.3,
        }
    }
}

impl RiskWeights {
    /// Apply the weights and clamp into [0, 1]. Not rounded.
    pub fn combine(&self, keyword_ratio: f64, sender_concentration: f64) -> f64 {
        let raw = self.keyword_weight * keyword_ratio
            + self.concentration_weight * sender_concentration;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }
}

/// The signals behind a risk score, as reported to callers.
///
/// Only `risk_score` is rounded. The two ratios are left unrounded so the
/// score can be recomputed exactly from the reported values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RiskSignals {
    /// Final score in [0, 1], rounded to 3 decimals
    pub risk_score: f64,
    /// Fraction of messages containing a boycott phrase (0.0-1.0)
    pub keyword_ratio: f64,
    /// Fraction of flagged messages from the top flagging sender (0.0-1.0)
    pub sender_concentration: f64,
    pub total_messages: usize,
    pub signal_messages: usize,
}

/// Round to 3 decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Score a conversation from its messages and per-sender statistics.
///
/// The flagged-message count is recomputed from the messages rather than
/// summed from `stats`; both apply the same predicate, so they agree when
/// `stats` came from the same messages.
pub fn score_risk(
    messages: &[Message],
    stats: &BTreeMap<String, SenderStats>,
    vocabulary: &Vocabulary,
    weights: &RiskWeights,
) -> RiskSignals {
    if messages.is_empty() {
        return RiskSignals::default();
    }

    let total_messages = messages.len();
    let signal_messages = messages
        .iter()
        .filter(|m| vocabulary.contains_signal(&m.text))
        .count();

    let keyword_ratio = signal_messages as f64 / total_messages as f64;

    let sender_concentration = if signal_messages > 0 {
        let top = stats
            .values()
            .map(|s| s.signal_message_count)
            .max()
            .unwrap_or(0);
        // Guard against stats built from a different message set
        (top as f64 / signal_messages as f64).min(1.0)
    } else {
        0.0
    };

    RiskSignals {
        risk_score: round3(weights.combine(keyword_ratio, sender_concentration)),
        keyword_ratio,
        sender_concentration,
        total_messages,
        signal_messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::stats::compute_sender_stats;

    fn msg(sender: &str, text: &str) -> Message {
        Message::new("1/1/25 10:00", sender, text)
    }

    fn score(messages: &[Message]) -> RiskSignals {
        let vocab = Vocabulary::new(["boycott"]);
        let stats = compute_sender_stats(messages, &vocab);
        score_risk(messages, &stats, &vocab, &RiskWeights::default())
    }

    #[test]
    fn test_empty_is_all_zero() {
        let signals = score(&[]);
        assert_eq!(signals, RiskSignals::default());
        assert_eq!(signals.risk_score, 0.0);
    }

    #[test]
    fn test_no_signals() {
        let signals = score(&[msg("A", "hello"), msg("B", "hi")]);
        assert_eq!(signals.total_messages, 2);
        assert_eq!(signals.signal_messages, 0);
        assert_eq!(signals.keyword_ratio, 0.0);
        assert_eq!(signals.sender_concentration, 0.0);
        assert_eq!(signals.risk_score, 0.0);
    }

    #[test]
    fn test_single_flagging_sender() {
        // 2 of 4 flagged, both from A: 0.7 * 0.5 + 0.3 * 1.0 = 0.65
        let signals = score(&[
            msg("A", "boycott"),
            msg("B", "why"),
            msg("A", "boycott him"),
            msg("C", "ok"),
        ]);
        assert_eq!(signals.signal_messages, 2);
        assert!((signals.keyword_ratio - 0.5).abs() < 1e-12);
        assert!((signals.sender_concentration - 1.0).abs() < 1e-12);
        assert!((signals.risk_score - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_split_flagging_senders() {
        // 3 of 3 flagged, top sender has 2: 0.7 + 0.3 * 2/3 = 0.9
        let signals = score(&[
            msg("A", "boycott"),
            msg("B", "boycott"),
            msg("A", "boycott"),
        ]);
        assert!((signals.sender_concentration - 2.0 / 3.0).abs() < 1e-12);
        assert!((signals.risk_score - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_score_is_rounded_to_three_decimals() {
        // 1 of 3 flagged: 0.7 / 3 + 0.3 = 0.5333... -> 0.533
        let signals = score(&[msg("A", "boycott"), msg("B", "x"), msg("C", "y")]);
        assert_eq!(signals.risk_score, 0.533);
    }

    #[test]
    fn test_combine_clamps() {
        let heavy = RiskWeights {
            keyword_weight: 2.0,
            concentration_weight: 2.0,
        };
        assert_eq!(heavy.combine(1.0, 1.0), 1.0);

        let negative = RiskWeights {
            keyword_weight: -1.0,
            concentration_weight: 0.0,
        };
        assert_eq!(negative.combine(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.12345), 0.123);
        assert_eq!(round3(0.9996), 1.0);
        assert_eq!(round3(0.0), 0.0);
    }
}
