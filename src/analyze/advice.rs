//! Reader-facing advice: improvement recommendations and detected issues.
//!
//! Pure threshold checks over the sub-scores and features. The strings
//! are the API contract; tests pin the trigger conditions, not the exact
//! wording.

use super::features::TextFeatures;
use crate::result::SubScores;

const WEAK_DIMENSION: f32 = 0.6;
const POOR_READABILITY: f32 = 0.4;
const NOTICEABLE_BIAS: f32 = 0.3;
const FEW_SOURCES: usize = 3;

const SHORT_TEXT_WORDS: usize = 100;
const HEAVY_BIAS: f32 = 0.5;
const UNREADABLE: f32 = 0.3;
const SHOUTING_RATIO: f32 = 0.1;

pub fn recommendations(scores: &SubScores, features: &TextFeatures) -> Vec<String> {
    let mut out = Vec::new();
    if scores.quality < WEAK_DIMENSION {
        out.push("Improve text quality with clearer language and better structure".to_string());
    }
    if scores.factual < WEAK_DIMENSION {
        out.push("Add more verifiable sources and precise data".to_string());
    }
    if scores.source_reliability < WEAK_DIMENSION {
        out.push("Use more trustworthy sources and add author information".to_string());
    }
    if features.readability_score < POOR_READABILITY {
        out.push("Simplify the language for better readability".to_string());
    }
    if features.bias_level > NOTICEABLE_BIAS {
        out.push("Reduce emotional language for more objectivity".to_string());
    }
    if features.sources_found < FEW_SOURCES {
        out.push("Add more external references and citations".to_string());
    }
    out
}

pub fn detect_issues(text: &str, features: &TextFeatures) -> Vec<String> {
    let mut out = Vec::new();
    if features.word_count < SHORT_TEXT_WORDS {
        out.push("Text too short for comprehensive analysis".to_string());
    }
    if features.sources_found == 0 {
        out.push("No source citations found".to_string());
    }
    if features.bias_level > HEAVY_BIAS {
        out.push("High degree of emotional or biased language".to_string());
    }
    if features.readability_score < UNREADABLE {
        out.push("Difficult to understand language".to_string());
    }
    if uppercase_ratio(text) > SHOUTING_RATIO {
        out.push("Excessive use of capital letters".to_string());
    }
    out
}

/// Uppercase characters over all characters, whitespace included.
fn uppercase_ratio(text: &str) -> f32 {
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f32 / text.chars().count().max(1) as f32
}
