//! Flesch Reading Ease, self-contained.
//!
//! FRE = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
//!
//! Sentences are `.`/`!`/`?` runs with non-blank content; syllables use a
//! vowel-group count with a silent-e discount and a minimum of one per
//! word that has letters at all. Good enough to rank prose, not a
//! linguistics package.

/// `None` when the text has no countable words or sentences; callers
/// substitute their own neutral value.
pub fn flesch_reading_ease(text: &str) -> Option<f32> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    if sentences == 0 {
        return None;
    }

    let syllables: usize = words.iter().map(|w| syllables_in(w)).sum();
    let word_count = words.len() as f32;
    Some(206.835 - 1.015 * (word_count / sentences as f32) - 84.6 * (syllables as f32 / word_count))
}

/// Heuristic syllable count. Tokens without letters (numbers, bare
/// punctuation) count zero.
fn syllables_in(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut groups = 0usize;
    let mut prev_vowel = false;
    for c in letters.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }
    // Silent trailing e ("table" keeps its -le syllable).
    if letters.ends_with('e') && !letters.ends_with("le") && groups > 1 {
        groups -= 1;
    }
    groups.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllable_heuristic_on_known_words() {
        assert_eq!(syllables_in("cat"), 1);
        assert_eq!(syllables_in("reading"), 2);
        assert_eq!(syllables_in("table"), 2);
        assert_eq!(syllables_in("notice"), 2);
        assert_eq!(syllables_in("strength"), 1);
        assert_eq!(syllables_in("87%"), 0);
        assert_eq!(syllables_in("b"), 1);
    }

    #[test]
    fn simple_prose_scores_high() {
        let score = flesch_reading_ease("The cat sat on the mat. The dog ran to the door.").unwrap();
        assert!(score > 90.0, "got {score}");
    }

    #[test]
    fn dense_prose_scores_lower_than_simple() {
        let simple = flesch_reading_ease("The cat sat. The dog ran.").unwrap();
        let dense = flesch_reading_ease(
            "Institutional accountability necessitates comprehensive organizational transparency.",
        )
        .unwrap();
        assert!(dense < simple);
    }

    #[test]
    fn no_words_or_no_sentences_yields_none() {
        assert_eq!(flesch_reading_ease(""), None);
        assert_eq!(flesch_reading_ease("   "), None);
        // Tokens exist but every segment between dots is blank.
        assert_eq!(flesch_reading_ease(".........."), None);
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert!(flesch_reading_ease("plain words with no final stop").is_some());
    }
}
