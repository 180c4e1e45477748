use super::NormalizedText;

/// Trait for canonicalizing utterances before they are compared
pub trait TextNormalizer: Send + Sync {
    /// Normalize a raw utterance (target content or recognized transcript)
    fn normalize(&self, raw: &str) -> NormalizedText;

    /// Get the name of this normalizer for logging
    fn name(&self) -> &'static str;
}
