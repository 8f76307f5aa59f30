//! Weighted combination and the classification ladder.
//!
//! credibility = 0.40 * quality + 0.35 * factual + 0.25 * source.
//! Confidence is 1 minus the population variance of the three
//! sub-scores, clamped to [0.1, 1.0]: the further the dimensions
//! disagree, the less the verdict is worth.

use crate::result::{Classification, SubScores};

const QUALITY_WEIGHT: f32 = 0.40;
const FACTUAL_WEIGHT: f32 = 0.35;
const SOURCE_WEIGHT: f32 = 0.25;

const MIN_CONFIDENCE: f32 = 0.1;
const LOW_CONFIDENCE_GATE: f32 = 0.3;
const HIGH_THRESHOLD: f32 = 0.75;
const MEDIUM_THRESHOLD: f32 = 0.55;
const LOW_THRESHOLD: f32 = 0.35;

/// Returns `(credibility_score, confidence)`.
pub fn combine(scores: &SubScores) -> (f32, f32) {
    let credibility = QUALITY_WEIGHT * scores.quality
        + FACTUAL_WEIGHT * scores.factual
        + SOURCE_WEIGHT * scores.source_reliability;

    let mean = (scores.quality + scores.factual + scores.source_reliability) / 3.0;
    let variance = ((scores.quality - mean).powi(2)
        + (scores.factual - mean).powi(2)
        + (scores.source_reliability - mean).powi(2))
        / 3.0;
    let confidence = (1.0 - variance).clamp(MIN_CONFIDENCE, 1.0);

    (credibility, confidence)
}

/// Confidence gates first: an uncertain verdict is questionable no
/// matter how high the score.
pub fn classify(credibility: f32, confidence: f32) -> Classification {
    if confidence < LOW_CONFIDENCE_GATE {
        Classification::Questionable
    } else if credibility > HIGH_THRESHOLD {
        Classification::High
    } else if credibility > MEDIUM_THRESHOLD {
        Classification::Medium
    } else if credibility > LOW_THRESHOLD {
        Classification::Low
    } else {
        Classification::Questionable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs(q: f32, f: f32, s: f32) -> SubScores {
        SubScores {
            quality: q,
            factual: f,
            source_reliability: s,
        }
    }

    #[test]
    fn weights_are_applied() {
        let (score, _) = combine(&subs(1.0, 0.0, 0.0));
        assert!((score - 0.40).abs() < 1e-6);
        let (score, _) = combine(&subs(0.0, 1.0, 0.0));
        assert!((score - 0.35).abs() < 1e-6);
        let (score, _) = combine(&subs(0.0, 0.0, 1.0));
        assert!((score - 0.25).abs() < 1e-6);
    }

    #[test]
    fn agreement_means_full_confidence() {
        let (_, confidence) = combine(&subs(0.6, 0.6, 0.6));
        assert!((confidence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn disagreement_lowers_confidence() {
        // Population variance of (1, 0, 0) is 2/9.
        let (_, confidence) = combine(&subs(1.0, 0.0, 0.0));
        assert!((confidence - (1.0 - 2.0 / 9.0)).abs() < 1e-5);
    }

    #[test]
    fn confidence_never_drops_below_floor() {
        // Sub-scores in [0, 1] keep variance under 0.9, so exercise the
        // floor directly with out-of-band inputs.
        let (_, confidence) = combine(&subs(2.0, -1.0, 0.5));
        assert!((confidence - MIN_CONFIDENCE).abs() < 1e-6);
    }

    #[test]
    fn thresholds_are_strict_greater_than() {
        assert_eq!(classify(0.75, 1.0), Classification::Medium);
        assert_eq!(classify(0.7501, 1.0), Classification::High);
        assert_eq!(classify(0.55, 1.0), Classification::Low);
        assert_eq!(classify(0.5501, 1.0), Classification::Medium);
        assert_eq!(classify(0.35, 1.0), Classification::Questionable);
        assert_eq!(classify(0.3501, 1.0), Classification::Low);
    }

    #[test]
    fn low_confidence_gates_everything_to_questionable() {
        assert_eq!(classify(0.95, 0.29), Classification::Questionable);
        assert_eq!(classify(0.95, 0.3), Classification::High);
    }
}
