mod normalized_text;
mod practice;
mod text_normalizer;

pub use normalized_text::{NormalizedText, WordToken};
pub use practice::PracticeNormalizer;
pub use text_normalizer::TextNormalizer;
