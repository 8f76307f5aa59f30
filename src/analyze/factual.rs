//! Factuality dimension.
//!
//! Mean of three clamped factors: citation-and-precision density
//! (scaled x100), consistency (1 minus hedge ratio), and citation
//! count saturating at five.

use super::features::TextFeatures;
use crate::heuristics::Heuristics;

const FULL_SOURCE_COUNT: f32 = 5.0;
const DENSITY_SCALE: f32 = 100.0;

pub fn score(text: &str, features: &TextFeatures, heuristics: &Heuristics) -> f32 {
    let source_count = Heuristics::count_matches(&heuristics.factual_source_patterns, text);
    let precise_count = Heuristics::count_matches(&heuristics.precise_patterns, text);
    let vague_count = Heuristics::count_matches(&heuristics.vague_patterns, text);

    let words = features.word_count.max(1) as f32;
    let density = ((source_count + precise_count) as f32 / words * DENSITY_SCALE).min(1.0);
    let consistency = 1.0 - (vague_count as f32 / words).min(1.0);
    let citations = (source_count as f32 / FULL_SOURCE_COUNT).min(1.0);

    (density + consistency + citations) / 3.0
}
