// Target inference: guess who a boycott is aimed at.
//
// Heuristic: tokenize only the flagged messages, count words of 3+ characters,
// and take the most frequent one. In practice that is often a name or nickname.

use std::collections::HashMap;

use serde::Serialize;

use crate::signals::vocabulary::Vocabulary;
use crate::transcript::message::Message;

/// How many mentions the analysis result reports.
pub const TARGET_MENTION_LIMIT: usize = 10;

/// Tokens shorter than this (in characters) are ignored.
const MIN_TOKEN_CHARS: usize = 3;

/// Token frequencies from flagged messages, ranked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetInference {
    /// Most frequent token, if any flagged message had one
    pub candidate: Option<String>,
    /// Every counted token, by descending count; ties keep first-seen order
    pub mentions: Vec<(String, usize)>,
}

impl TargetInference {
    /// The `n` highest-ranked (token, count) pairs.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        self.mentions.iter().take(n).cloned().collect()
    }
}

/// Split text into runs of Unicode letters, digits and underscores.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
}

/// Count candidate tokens across all flagged messages.
///
/// Among tokens with equal counts, the one that first appeared earliest in
/// the transcript ranks higher, so the candidate is deterministic.
pub fn infer_target(messages: &[Message], vocabulary: &Vocabulary) -> TargetInference {
    // Position in `counts` for each token, preserving first-seen order
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for msg in messages {
        if !vocabulary.contains_signal(&msg.text) {
            continue;
        }
        for token in tokenize(&msg.text) {
            if token.chars().count() < MIN_TOKEN_CHARS {
                continue;
            }
            match index.get(token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token, counts.len());
                    counts.push((token, 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let mentions: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count))
        .collect();

    TargetInference {
        candidate: mentions.first().map(|(token, _)| token.clone()),
        mentions,
    }
}
