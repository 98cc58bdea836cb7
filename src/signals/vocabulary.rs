// Boycott vocabulary and the lexical signal check.
//
// Detection is a plain substring test against the lowercased text. There is
// no tokenization or word-boundary anchoring, so a phrase also matches when
// it is embedded in a longer word. Changing that changes which messages get
// flagged.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Built-in Hebrew boycott phrases, version 1.
///
/// "boycotting", "boycott", "don't talk to him/her", "don't answer him/her",
/// "don't invite him/her".
pub const BOYCOTT_PHRASES: &[&str] = &[
    "מחרימים",
    "חרם",
    "לא לדבר איתו",
    "לא לדבר איתה",
    "אל תענו לו",
    "אל תענו לה",
    "לא להזמין אותו",
    "לא להזמין אותה",
];

/// An ordered set of phrases whose presence flags a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    phrases: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(BOYCOTT_PHRASES.iter().copied())
    }
}

impl Vocabulary {
    /// Build a vocabulary from arbitrary phrases.
    ///
    /// Phrases are trimmed and lowercased; blank ones are skipped (an empty
    /// phrase would be a substring of every message). Duplicates are kept
    /// only once, in first-seen order.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for phrase in phrases {
            let phrase = phrase.as_ref().trim().to_lowercase();
            if !phrase.is_empty() && !out.contains(&phrase) {
                out.push(phrase);
            }
        }
        Self { phrases: out }
    }

    /// Load a newline-delimited phrase file. Blank lines and `#` comments are ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file {}", path.display()))?;

        let vocabulary = Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        );

        if vocabulary.is_empty() {
            anyhow::bail!(
                "Vocabulary file {} contains no phrases; add one phrase per line",
                path.display()
            );
        }
        Ok(vocabulary)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Whether any phrase occurs in the text (case-folded substring match).
    pub fn contains_signal(&self, text: &str) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        let lowered = text.to_lowercase();
        self.phrases.iter().any(|phrase| lowered.contains(phrase.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_builtin_phrase() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.len(), BOYCOTT_PHRASES.len());
        assert!(vocab.contains_signal("צריך חרם?"));
        assert!(vocab.contains_signal("כן, אולי לא להזמין אותו"));
        assert!(!vocab.contains_signal("מדברים על זה"));
    }

    #[test]
    fn test_match_is_case_folded() {
        let vocab = Vocabulary::new(["Boycott"]);
        assert!(vocab.contains_signal("BOYCOTT him"));
        assert!(vocab.contains_signal("lets boycott"));
    }

    #[test]
    fn test_match_inside_longer_word() {
        // Substring containment, not word boundaries
        let vocab = Vocabulary::new(["ban"]);
        assert!(vocab.contains_signal("we should ban him"));
        assert!(vocab.contains_signal("banana"));
    }

    #[test]
    fn test_blank_phrases_are_ignored() {
        let vocab = Vocabulary::new(["", "   ", "skip"]);
        assert_eq!(vocab.phrases(), ["skip".to_string()]);
        assert!(!vocab.contains_signal("anything at all"));
    }

    #[test]
    fn test_empty_vocabulary_flags_nothing() {
        let vocab = Vocabulary::new(Vec::<String>::new());
        assert!(!vocab.contains_signal("חרם"));
    }

    #[test]
    fn test_from_file_skips_comments() {
        let dir = std::env::temp_dir().join("whatsafe-vocab-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("phrases.txt");
        std::fs::write(&path, "# custom list\nexclude\n\nleave her out\n").unwrap();

        let vocab = Vocabulary::from_file(&path).unwrap();
        assert_eq!(vocab.phrases(), ["exclude".to_string(), "leave her out".to_string()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_from_file_rejects_empty_list() {
        let dir = std::env::temp_dir().join("whatsafe-vocab-empty-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("phrases.txt");
        std::fs::write(&path, "# nothing here\n\n").unwrap();

        assert!(Vocabulary::from_file(&path).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
