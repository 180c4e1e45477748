use serde::{Deserialize, Serialize};

use super::alignment::WordAccuracy;

const EXCELLENT_RATIO: f64 = 0.8;
const GOOD_RATIO: f64 = 0.6;
const EXCELLENT_SCORE: u8 = 80;
const GOOD_SCORE: u8 = 60;

/// Outcome category of an attempt. The caller chooses the words shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Excellent,
    Good,
    NeedsImprovement,
}

/// Display severity attached to each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl FeedbackTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::NeedsImprovement => "needs_improvement",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Excellent => Severity::Success,
            Self::Good => Severity::Warning,
            Self::NeedsImprovement => Severity::Error,
        }
    }
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Word-level classifier: either the whole-utterance similarity or the share
/// of correct words can lift the tier.
pub fn classify(overall_similarity: f64, words: &[WordAccuracy]) -> FeedbackTier {
    let correct_ratio = if words.is_empty() {
        0.0
    } else {
        words.iter().filter(|w| w.correct).count() as f64 / words.len() as f64
    };

    if overall_similarity >= EXCELLENT_RATIO || correct_ratio >= EXCELLENT_RATIO {
        FeedbackTier::Excellent
    } else if overall_similarity >= GOOD_RATIO || correct_ratio >= GOOD_RATIO {
        FeedbackTier::Good
    } else {
        FeedbackTier::NeedsImprovement
    }
}

/// Whole-utterance classifier on the integer score alone.
pub fn classify_score(overall_score: u8) -> FeedbackTier {
    if overall_score >= EXCELLENT_SCORE {
        FeedbackTier::Excellent
    } else if overall_score >= GOOD_SCORE {
        FeedbackTier::Good
    } else {
        FeedbackTier::NeedsImprovement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::WordToken;

    fn words(correct: usize, total: usize) -> Vec<WordAccuracy> {
        (0..total)
            .map(|i| {
                let similarity = if i < correct { 1.0 } else { 0.0 };
                WordAccuracy::from_similarity(WordToken::from("w"), similarity)
            })
            .collect()
    }

    #[test]
    fn test_overall_similarity_boundaries() {
        let none_correct = words(0, 4);
        assert_eq!(classify(0.80, &none_correct), FeedbackTier::Excellent);
        assert_eq!(classify(0.79, &none_correct), FeedbackTier::Good);
        assert_eq!(classify(0.60, &none_correct), FeedbackTier::Good);
        assert_eq!(classify(0.59, &none_correct), FeedbackTier::NeedsImprovement);
    }

    #[test]
    fn test_word_ratio_promotes_tier() {
        // 4 of 5 correct = 0.8 even with a low overall similarity
        assert_eq!(classify(0.1, &words(4, 5)), FeedbackTier::Excellent);
        // 3 of 5 correct = 0.6
        assert_eq!(classify(0.1, &words(3, 5)), FeedbackTier::Good);
        assert_eq!(classify(0.1, &words(2, 5)), FeedbackTier::NeedsImprovement);
    }

    #[test]
    fn test_no_words_falls_back_to_similarity() {
        assert_eq!(classify(0.9, &[]), FeedbackTier::Excellent);
        assert_eq!(classify(0.2, &[]), FeedbackTier::NeedsImprovement);
    }

    #[test]
    fn test_score_boundaries() {
        assert_eq!(classify_score(100), FeedbackTier::Excellent);
        assert_eq!(classify_score(80), FeedbackTier::Excellent);
        assert_eq!(classify_score(79), FeedbackTier::Good);
        assert_eq!(classify_score(60), FeedbackTier::Good);
        assert_eq!(classify_score(59), FeedbackTier::NeedsImprovement);
        assert_eq!(classify_score(0), FeedbackTier::NeedsImprovement);
    }

    #[test]
    fn test_severity() {
        assert_eq!(FeedbackTier::Excellent.severity(), Severity::Success);
        assert_eq!(FeedbackTier::Good.severity(), Severity::Warning);
        assert_eq!(FeedbackTier::NeedsImprovement.severity().as_str(), "error");
    }
}
