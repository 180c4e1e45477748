use serde::{Deserialize, Serialize};
use std::fmt;

/// Utterance after case folding, punctuation removal and trimming.
///
/// Only a [`TextNormalizer`](super::TextNormalizer) produces these, so every
/// value has already been through the same canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters, the unit every distance is measured in.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whitespace-delimited words, in utterance order.
    pub fn words(&self) -> Vec<WordToken> {
        self.0
            .split_whitespace()
            .map(|word| WordToken(word.to_string()))
            .collect()
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One word of a [`NormalizedText`]. Position in the owning sequence is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordToken(String);

impl WordToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WordToken {
    fn from(word: &str) -> Self {
        Self(word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_preserve_order() {
        let text = NormalizedText::new("good morning everyone".to_string());
        let tokens = text.words();
        let words: Vec<&str> = tokens.iter().map(|w| w.as_str()).collect();

        assert_eq!(words, vec!["good", "morning", "everyone"]);
        assert_eq!(text.word_count(), 3);
    }

    #[test]
    fn test_empty_text_has_no_words() {
        let text = NormalizedText::new(String::new());
        assert!(text.words().is_empty());
        assert_eq!(text.char_len(), 0);
    }

    #[test]
    fn test_char_len_counts_scalars_not_bytes() {
        let text = NormalizedText::new("año".to_string());
        assert_eq!(text.char_len(), 3);
    }
}
