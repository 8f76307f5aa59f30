//! Canonical example texts served by `/api/example/{kind}`.
//!
//! Three registers: a cited, numeric study write-up; a hedged wellness
//! piece; and an all-caps rant. The high and low texts are tuned against
//! the scoring pipeline (the high one lands in the `high` band, the low
//! one trips the bias and capitalization issues), so edits here need a
//! matching pass over the scoring tests.

pub const KINDS: [&str; 3] = ["high_quality", "medium_quality", "low_quality"];

pub const HIGH_QUALITY: &str = "A twelve month study from the Calder Institute shows that regular spaced reading practice raised working memory scores in 87% of enrolled adult learners. According to the research team, exactly 1,247 people completed the program, and 64 percent of them reported clear gains on standardized attention tests afterward. The trial used a blinded design, with 623 people in the control group and 624 people in the training group across four separate regional centers.
The training sessions ran for twenty minutes each morning, five days per week, and every session was logged by the center staff. Before the trial began, each person passed a hearing screen, a vision screen, and a short health survey with a nurse on site. Scores were collected at the start, at month six, and at month twelve, with the same test forms used at every visit.
Based on the full report, attention spans rose by 19% on average, and recall speed rose by 23% in the trained study group overall. According to the published tables, gains held at the one year mark in 81% of the trained group, based on repeat testing. The control group read on a normal schedule, with no set plan, and their scores stayed flat across the whole year. Drop out rates stayed under 6% in both groups, and the team tracked each exit with a short standard form.
The survey data from the second year, gathered between 2023 and 2024, matched the first round of results and held steady across all age bands. Research indicates that steady practice builds durable recall, and the study shows a clean dose response curve between weekly practice minutes and measured gains. Doctor Lena Park, the lead author, explains: \"The gains are real, repeatable, and specifically tied to practice time rather than to age or to prior schooling.\"
The full dataset covers 124 test items per person, and the analysis code is posted for public review and reuse. Funding came from a national science grant, award number 220841, and no private firm had any role in the design or the write up. Teachers who joined the second phase in 2023 saw the same direction of change, with a 17 percent rise in tracked recall drills. A separate replication report from the northern center, filed in early 2024, lists matched gains for 312 people over nine months of practice.
Independent teams at two public universities repeated the full protocol in 2024 and reported the same pattern of gains in both replication rounds. The work was funded by a public grant, the dataset is open for audit, and the methods page lists each measure in plain language (Calder Institute, 2024). Further reading and source: links are posted at https://calder-institute.org/memory2024 https://opengrants.gov/awards/220841 https://reuters.com/health/memory-training-2024 and https://nature.com/articles/cogn-2024-1187 for readers who want the raw numbers.";

pub const MEDIUM_QUALITY: &str = "Meditation can really help the brain. Many people report that they can focus better after meditating. There are studies about this topic that show meditation has positive effects on attention. A researcher said that regular meditation improves attention and calm. This is especially important in our busy times. Many experts recommend at least 10 minutes of daily meditation for beginners. There are several kinds of meditation, such as mindfulness or breathing practice, and most people can learn the basics in a few weeks.";

pub const LOW_QUALITY: &str = "AMAZING! INCREDIBLE! SHOCKING! This UNBELIEVABLE AWESOME PERFECT cure is REAL! TERRIBLE HORRIBLE DISGUSTING lies hide the BRILLIANT GENIUS trick! STUPID IDIOTIC doubters! FANTASTIC WONDERFUL results! AMAZING SHOCKING TERRIBLE truth! WAKE UP! UNBELIEVABLE! HORRIBLE! AMAZING! PERFECT! INCREDIBLE!";

pub fn sample(kind: &str) -> Option<&'static str> {
    match kind {
        "high_quality" => Some(HIGH_QUALITY),
        "medium_quality" => Some(MEDIUM_QUALITY),
        "low_quality" => Some(LOW_QUALITY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_resolves() {
        for kind in KINDS {
            assert!(sample(kind).is_some(), "{kind}");
        }
        assert!(sample("pristine_quality").is_none());
    }

    #[test]
    fn high_sample_carries_citations_and_numbers() {
        assert_eq!(HIGH_QUALITY.matches("https://").count(), 4);
        assert!(HIGH_QUALITY.contains("According to"));
        assert!(HIGH_QUALITY.contains('%'));
        assert!(HIGH_QUALITY.split_whitespace().count() > 400);
    }

    #[test]
    fn high_sample_avoids_hedges_and_emotional_words() {
        let lowered = HIGH_QUALITY.to_lowercase();
        for term in [
            "many", "some", "several", "few", "might", "could", "possibly", "maybe", "seems",
            "appears", "likely", "amazing", "terrible", "incredible", "shocking", "unbelievable",
            "awesome", "horrible", "fantastic", "disgusting", "perfect", "brilliant", "stupid",
            "genius", "idiotic", "wonderful",
        ] {
            assert!(!lowered.contains(term), "high sample contains {term:?}");
        }
    }

    #[test]
    fn low_sample_is_short_shouty_and_unsourced() {
        assert!(LOW_QUALITY.split_whitespace().count() < 100);
        assert!(!LOW_QUALITY.contains("http"));
        let upper = LOW_QUALITY.chars().filter(|c| c.is_uppercase()).count();
        assert!(upper as f32 / LOW_QUALITY.chars().count() as f32 > 0.1);
    }
}
