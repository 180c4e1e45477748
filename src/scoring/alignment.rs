//! Per-word scoring of a spoken attempt against the target phrase.
//!
//! Every target word gets exactly one [`WordAccuracy`], whatever the number of
//! spoken words. How spoken words are paired with target words is decided by
//! the [`AlignmentStrategy`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::similarity::similarity;
use crate::normalizer::WordToken;

/// Word similarity at or above which a word counts as correct.
pub const CORRECT_THRESHOLD: f64 = 0.8;
/// Word similarity at or above which an incorrect word still counts as partial.
pub const PARTIAL_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAccuracy {
    pub word: WordToken,
    pub correct: bool,
    pub partial: bool,
}

impl WordAccuracy {
    pub fn from_similarity(word: WordToken, similarity: f64) -> Self {
        let correct = similarity >= CORRECT_THRESHOLD;
        let partial = !correct && similarity >= PARTIAL_THRESHOLD;
        Self {
            word,
            correct,
            partial,
        }
    }

    pub fn is_incorrect(&self) -> bool {
        !self.correct && !self.partial
    }
}

/// How spoken words are paired with target words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentStrategy {
    /// Target word `i` against spoken word `i`, or `""` past the end of the attempt.
    #[default]
    Positional,
    /// Word-level edit alignment, so one inserted or dropped spoken word
    /// does not shift every word after it.
    Sequence,
}

impl AlignmentStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Sequence => "sequence",
        }
    }
}

impl FromStr for AlignmentStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "positional" => Ok(Self::Positional),
            "sequence" => Ok(Self::Sequence),
            _ => anyhow::bail!(
                "Unknown alignment strategy '{}'. Supported: positional, sequence",
                s
            ),
        }
    }
}

/// Score each target word against the spoken word paired with it.
pub fn align_words(
    target: &[WordToken],
    spoken: &[WordToken],
    strategy: AlignmentStrategy,
) -> Vec<WordAccuracy> {
    let pairing = match strategy {
        AlignmentStrategy::Positional => positional_pairing(target.len(), spoken.len()),
        AlignmentStrategy::Sequence => sequence_pairing(target, spoken),
    };

    target
        .iter()
        .zip(pairing)
        .map(|(word, paired)| {
            let heard = paired.map(|idx| spoken[idx].as_str()).unwrap_or("");
            WordAccuracy::from_similarity(word.clone(), similarity(word.as_str(), heard))
        })
        .collect()
}

fn positional_pairing(target_len: usize, spoken_len: usize) -> Vec<Option<usize>> {
    (0..target_len)
        .map(|i| (i < spoken_len).then_some(i))
        .collect()
}

/// Wagner-Fischer over word tokens, then walk back from the bottom-right cell.
///
/// Ties prefer the diagonal (match or substitution) so a mispronounced word
/// stays paired with its attempt, then dropping a target word.
fn sequence_pairing(target: &[WordToken], spoken: &[WordToken]) -> Vec<Option<usize>> {
    let n = target.len();
    let m = spoken.len();

    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        d[0][j] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(target[i - 1] != spoken[j - 1]);
            d[i][j] = (d[i - 1][j - 1] + cost)
                .min(d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1);
        }
    }

    let mut pairing = vec![None; n];
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 {
            let cost = usize::from(target[i - 1] != spoken[j - 1]);
            if d[i][j] == d[i - 1][j - 1] + cost {
                pairing[i - 1] = Some(j - 1);
                i -= 1;
                j -= 1;
                continue;
            }
        }
        if i > 0 && d[i][j] == d[i - 1][j] + 1 {
            // Target word never spoken
            i -= 1;
        } else {
            // Extra spoken word
            j -= 1;
        }
    }

    pairing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<WordToken> {
        text.split_whitespace().map(WordToken::from).collect()
    }

    fn verdicts(accuracies: &[WordAccuracy]) -> Vec<&'static str> {
        accuracies
            .iter()
            .map(|a| match (a.correct, a.partial) {
                (true, _) => "correct",
                (false, true) => "partial",
                (false, false) => "incorrect",
            })
            .collect()
    }

    #[test]
    fn test_word_classification_thresholds() {
        let word = WordToken::from("word");
        assert!(WordAccuracy::from_similarity(word.clone(), 0.8).correct);
        assert!(WordAccuracy::from_similarity(word.clone(), 0.79).partial);
        assert!(WordAccuracy::from_similarity(word.clone(), 0.5).partial);
        assert!(WordAccuracy::from_similarity(word.clone(), 0.49).is_incorrect());

        let correct = WordAccuracy::from_similarity(word, 1.0);
        assert!(correct.correct && !correct.partial);
    }

    #[test]
    fn test_positional_exact_match() {
        let result = align_words(
            &tokens("good morning"),
            &tokens("good morning"),
            AlignmentStrategy::Positional,
        );
        assert_eq!(verdicts(&result), vec!["correct", "correct"]);
    }

    #[test]
    fn test_positional_missing_trailing_word() {
        let result = align_words(
            &tokens("good morning"),
            &tokens("good"),
            AlignmentStrategy::Positional,
        );
        assert_eq!(verdicts(&result), vec!["correct", "incorrect"]);
        assert_eq!(result[1].word.as_str(), "morning");
    }

    #[test]
    fn test_length_follows_target_not_spoken() {
        let target = tokens("the quick brown fox");
        for spoken in ["", "the", "the quick brown fox jumps over"] {
            for strategy in [AlignmentStrategy::Positional, AlignmentStrategy::Sequence] {
                assert_eq!(align_words(&target, &tokens(spoken), strategy).len(), 4);
            }
        }
    }

    #[test]
    fn test_partial_word() {
        // "mornin" vs "morning": 6/7 -> correct; "marnin" vs "morning": 5/7 -> partial
        let result = align_words(
            &tokens("morning morning"),
            &tokens("mornin marnin"),
            AlignmentStrategy::Positional,
        );
        assert_eq!(verdicts(&result), vec!["correct", "partial"]);
    }

    // One inserted spoken word: positional pairing shifts every later word,
    // sequence pairing re-synchronizes.
    #[test]
    fn test_inserted_word_positional_vs_sequence() {
        let target = tokens("i like green apples");
        let spoken = tokens("i really like green apples");

        let positional = align_words(&target, &spoken, AlignmentStrategy::Positional);
        assert_eq!(
            verdicts(&positional),
            vec!["correct", "incorrect", "incorrect", "incorrect"]
        );

        let sequence = align_words(&target, &spoken, AlignmentStrategy::Sequence);
        assert_eq!(
            verdicts(&sequence),
            vec!["correct", "correct", "correct", "correct"]
        );
    }

    #[test]
    fn test_dropped_word_positional_vs_sequence() {
        let target = tokens("please open the door");
        let spoken = tokens("please the door");

        let positional = align_words(&target, &spoken, AlignmentStrategy::Positional);
        assert_eq!(
            verdicts(&positional),
            vec!["correct", "incorrect", "incorrect", "incorrect"]
        );

        let sequence = align_words(&target, &spoken, AlignmentStrategy::Sequence);
        assert_eq!(
            verdicts(&sequence),
            vec!["correct", "incorrect", "correct", "correct"]
        );
    }

    #[test]
    fn test_sequence_keeps_substitution_paired() {
        let result = align_words(
            &tokens("good morning"),
            &tokens("good marnin"),
            AlignmentStrategy::Sequence,
        );
        assert_eq!(verdicts(&result), vec!["correct", "partial"]);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "sequence".parse::<AlignmentStrategy>().unwrap(),
            AlignmentStrategy::Sequence
        );
        assert_eq!(AlignmentStrategy::default(), AlignmentStrategy::Positional);
        assert!("fuzzy".parse::<AlignmentStrategy>().is_err());
    }
}
