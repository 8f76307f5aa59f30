//! # Feature Extraction
//!
//! One pass over the raw text producing the counts every scorer reads:
//! words, sentences, characters, citation and claim signals, readability,
//! and the emotional-bias ratio.
//!
//! Tokenization rules are deliberately blunt and documented here once:
//! - words are whitespace-split tokens, punctuation attached;
//! - sentences are non-blank `.`-delimited segments, so dots inside
//!   URLs or numbers fragment them;
//! - bias counts list words as substrings of the lowercased text.

use serde::Serialize;

use super::readability::flesch_reading_ease;
use crate::heuristics::Heuristics;

/// Neutral readability used when the Flesch score is uncomputable.
pub(crate) const NEUTRAL_READABILITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TextFeatures {
    pub word_count: usize,
    pub sentence_count: usize,
    pub char_count: usize,
    pub avg_sentence_length: f32,
    pub sources_found: usize,
    pub claims_verified: usize,
    /// Flesch Reading Ease / 100. Raw, not clamped; scorers clamp at use.
    pub readability_score: f32,
    /// Emotional-word occurrences per word, capped at 1.0.
    pub bias_level: f32,
}

pub fn extract(text: &str, heuristics: &Heuristics) -> TextFeatures {
    let word_count = text.split_whitespace().count();

    let sentence_lengths: Vec<usize> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.split_whitespace().count())
        .collect();
    let sentence_count = sentence_lengths.len();
    let avg_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        sentence_lengths.iter().sum::<usize>() as f32 / sentence_count as f32
    };

    let readability_score = flesch_reading_ease(text)
        .map(|fre| fre / 100.0)
        .unwrap_or(NEUTRAL_READABILITY);

    TextFeatures {
        word_count,
        sentence_count,
        char_count: text.chars().count(),
        avg_sentence_length,
        sources_found: Heuristics::count_matches(&heuristics.source_patterns, text),
        claims_verified: Heuristics::count_matches(&heuristics.claim_patterns, text),
        readability_score,
        bias_level: bias_level(text, word_count, heuristics),
    }
}

/// Substring occurrences of the emotional word list over the word count.
/// Substring on purpose: "AMAZING!!!" and "unbelievably" both count.
fn bias_level(text: &str, word_count: usize, heuristics: &Heuristics) -> f32 {
    let lowered = text.to_lowercase();
    let hits: usize = heuristics
        .emotional_words
        .iter()
        .map(|w| lowered.matches(w.as_str()).count())
        .sum();
    (hits as f32 / word_count.max(1) as f32).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::Heuristics;

    fn seed() -> Heuristics {
        Heuristics::seed()
    }

    #[test]
    fn counts_words_sentences_chars() {
        let f = extract("One two three. Four five.", &seed());
        assert_eq!(f.word_count, 5);
        assert_eq!(f.sentence_count, 2);
        assert_eq!(f.char_count, 25);
        assert!((f.avg_sentence_length - 2.5).abs() < 1e-6);
    }

    #[test]
    fn url_dots_fragment_sentences() {
        let f = extract("Read the study at https://nature.com/paper today.", &seed());
        // "https://nature" ends one segment, "com/paper today" the next.
        assert_eq!(f.sentence_count, 2);
        assert_eq!(f.word_count, 6);
        assert_eq!(f.sources_found, 1);
    }

    #[test]
    fn citation_and_claim_signals_are_counted() {
        let text =
            "According to the report, 45% of users agree. A study shows gains; research indicates the same. See www.example.org now.";
        let f = extract(text, &seed());
        // www + "according to" + "study shows" + "research indicates".
        assert_eq!(f.sources_found, 4);
        // 45% + "45 percent"-style none + study/research/report x3 + according to/shows.
        assert!(f.claims_verified >= 5);
    }

    #[test]
    fn bias_counts_substrings_case_insensitively() {
        let f = extract("AMAZING news. Simply amazingly terrible.", &seed());
        // "amazing" twice (once inside "amazingly"), "terrible" once.
        assert!((f.bias_level - 3.0 / 5.0).abs() < 1e-6);
    }

    #[test]
    fn bias_ratio_is_capped_at_one() {
        let f = extract("amazing amazing terrible horrible amazing terrible amazing", &seed());
        assert!(f.bias_level <= 1.0);
    }

    #[test]
    fn all_dots_text_gets_neutral_readability_and_no_sentences() {
        let f = extract("...............", &seed());
        assert_eq!(f.sentence_count, 0);
        assert_eq!(f.avg_sentence_length, 0.0);
        assert!((f.readability_score - NEUTRAL_READABILITY).abs() < 1e-6);
    }
}
