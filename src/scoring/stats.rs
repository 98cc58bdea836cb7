// Per-sender statistics.
//
// A straight fold over the messages: no cross-sender computation happens
// here. The risk scorer reads the signal counts to measure concentration.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::signals::vocabulary::Vocabulary;
use crate::transcript::message::Message;

/// Activity counters for one sender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SenderStats {
    /// Messages sent
    pub message_count: usize,
    /// Characters sent, after whitespace normalization
    pub char_count: usize,
    /// Messages containing a boycott phrase (never exceeds message_count)
    pub signal_message_count: usize,
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compute message, character and signal counts for every sender.
///
/// Senders are keyed by their exact display string (case-sensitive).
pub fn compute_sender_stats(
    messages: &[Message],
    vocabulary: &Vocabulary,
) -> BTreeMap<String, SenderStats> {
    let mut stats: BTreeMap<String, SenderStats> = BTreeMap::new();

    for msg in messages {
        let entry = stats.entry(msg.sender.clone()).or_default();
        entry.message_count += 1;
        entry.char_count += normalize_whitespace(&msg.text).chars().count();
        if vocabulary.contains_signal(&msg.text) {
            entry.signal_message_count += 1;
        }
    }

    stats
}
