//! Content-quality dimension.
//!
//! Equal-weight mean of four factors, each clamped to [0, 1]:
//! sentence length (saturates at 20 words), vocabulary diversity,
//! readability, and raw length (saturates at 500 words).

use super::clamp01;
use super::features::TextFeatures;

const FULL_SENTENCE_LENGTH: f32 = 20.0;
const FULL_LENGTH_WORDS: f32 = 500.0;

pub fn score(text: &str, features: &TextFeatures) -> f32 {
    let factors = [
        clamp01(features.avg_sentence_length / FULL_SENTENCE_LENGTH),
        vocabulary_diversity(text),
        clamp01(features.readability_score),
        clamp01(features.word_count as f32 / FULL_LENGTH_WORDS),
    ];
    factors.iter().sum::<f32>() / factors.len() as f32
}

/// Unique lowercased tokens over total tokens; 0 for empty text.
fn vocabulary_diversity(text: &str) -> f32 {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: std::collections::HashSet<&str> = tokens.iter().copied().collect();
    unique.len() as f32 / tokens.len() as f32
}
