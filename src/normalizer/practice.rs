use anyhow::Result;
use regex::Regex;

use crate::normalizer::{NormalizedText, TextNormalizer};

/// Normalizer applied to both exercise content and recognized transcripts
pub struct PracticeNormalizer {
    punctuation_regex: Regex,
    whitespace_regex: Option<Regex>,
}

impl PracticeNormalizer {
    pub fn new() -> Result<Self> {
        // Sentence punctuation speech-to-text tends to insert: . , ! ? ; :
        let punctuation_regex = Regex::new(r"[.,!?;:]")?;

        Ok(Self {
            punctuation_regex,
            whitespace_regex: None,
        })
    }

    /// Also collapse interior whitespace runs into a single space.
    pub fn collapsing_whitespace(mut self) -> Result<Self> {
        self.whitespace_regex = Some(Regex::new(r"\s+")?);
        Ok(self)
    }
}

impl TextNormalizer for PracticeNormalizer {
    fn normalize(&self, raw: &str) -> NormalizedText {
        let lowered = raw.to_lowercase();
        let stripped = self.punctuation_regex.replace_all(&lowered, "");

        let cleaned = match &self.whitespace_regex {
            Some(whitespace) => whitespace.replace_all(stripped.trim(), " ").into_owned(),
            None => stripped.trim().to_string(),
        };

        NormalizedText::new(cleaned)
    }

    fn name(&self) -> &'static str {
        "PracticeNormalizer"
    }
}
