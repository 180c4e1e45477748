//! Pronunciation scoring engine.
//!
//! Compares a recognized transcript with the exercise's target phrase:
//! normalize both, measure whole-utterance similarity, score each target
//! word, then pick a feedback tier. Everything here is synchronous and pure;
//! recognition and persistence live with the caller.

pub mod alignment;
pub mod distance;
pub mod feedback;
pub mod similarity;

pub use alignment::{align_words, AlignmentStrategy, WordAccuracy};
pub use distance::edit_distance;
pub use feedback::{classify, classify_score, FeedbackTier, Severity};
pub use similarity::{similarity, to_percent};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ScoringConfig;
use crate::normalizer::{PracticeNormalizer, TextNormalizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringOptions {
    /// Let the share of correct words promote the tier; otherwise only the
    /// overall score decides.
    pub word_level_feedback: bool,
    pub alignment: AlignmentStrategy,
    pub collapse_whitespace: bool,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            word_level_feedback: true,
            alignment: AlignmentStrategy::Positional,
            collapse_whitespace: false,
        }
    }
}

impl From<&ScoringConfig> for ScoringOptions {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            word_level_feedback: config.word_level_feedback,
            alignment: config.alignment,
            collapse_whitespace: config.collapse_whitespace,
        }
    }
}

/// Result of scoring one completed recognition attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: u8,
    /// Same value as `overall_score`; no separate acoustic signal exists.
    pub pronunciation_accuracy: u8,
    pub word_accuracies: Vec<WordAccuracy>,
    pub feedback: FeedbackTier,
}

impl ScoreResult {
    pub fn correct_words(&self) -> usize {
        self.word_accuracies.iter().filter(|w| w.correct).count()
    }
}

pub struct ScoringEngine {
    normalizer: Box<dyn TextNormalizer>,
    options: ScoringOptions,
}

impl ScoringEngine {
    pub fn new(options: ScoringOptions) -> Result<Self> {
        let normalizer = if options.collapse_whitespace {
            PracticeNormalizer::new()?.collapsing_whitespace()?
        } else {
            PracticeNormalizer::new()?
        };

        info!(
            "Scoring engine ready ({} alignment, word-level feedback: {})",
            options.alignment.as_str(),
            options.word_level_feedback
        );

        Ok(Self::with_normalizer(Box::new(normalizer), options))
    }

    pub fn with_normalizer(normalizer: Box<dyn TextNormalizer>, options: ScoringOptions) -> Self {
        Self {
            normalizer,
            options,
        }
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    pub fn normalizer(&self) -> &dyn TextNormalizer {
        self.normalizer.as_ref()
    }

    /// Score a transcript against the target phrase. Same inputs, same result.
    pub fn score(&self, target: &str, transcript: &str) -> ScoreResult {
        let target = self.normalizer.normalize(target);
        let spoken = self.normalizer.normalize(transcript);

        let overall = similarity(target.as_str(), spoken.as_str());
        let overall_score = to_percent(overall);

        let word_accuracies =
            align_words(&target.words(), &spoken.words(), self.options.alignment);

        let feedback = if self.options.word_level_feedback {
            classify(overall, &word_accuracies)
        } else {
            classify_score(overall_score)
        };

        debug!(
            "Scored {:?} against {:?} with {}: {} ({})",
            spoken.as_str(),
            target.as_str(),
            self.normalizer.name(),
            overall_score,
            feedback.as_str()
        );

        ScoreResult {
            overall_score,
            pronunciation_accuracy: overall_score,
            word_accuracies,
            feedback,
        }
    }
}
