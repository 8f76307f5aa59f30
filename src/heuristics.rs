//! # Heuristics Configuration
//!
//! The fixed word lists and pattern sets behind the scoring pipeline:
//! trusted domains, emotional-language terms, and the five regex groups
//! (source citations, verifiable claims, factual citations, precise
//! statements, vague hedges).
//!
//! - Loads from TOML (weights live in data, not in scoring code).
//! - Falls back to a built-in `default_seed()` when no config is found.
//! - Patterns are compiled once, case-insensitively, at load time.
//!
//! Scorers receive the compiled [`Heuristics`]; they never embed literals.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

pub const DEFAULT_HEURISTICS_CONFIG_PATH: &str = "config/heuristics.toml";
pub const ENV_HEURISTICS_CONFIG_PATH: &str = "HEURISTICS_CONFIG_PATH";

/* ----------------------------
Config schema (from TOML)
---------------------------- */

#[derive(Debug, Clone, Deserialize)]
pub struct HeuristicsConfig {
    /// Substring-matched against the lowercased URL host.
    #[serde(default)]
    pub trusted_domains: Vec<String>,
    /// Substring-counted against the lowercased text for the bias ratio.
    #[serde(default)]
    pub emotional_words: Vec<String>,
    pub patterns: PatternGroups,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatternGroups {
    /// Citation-ish signals counted into `sources_found`.
    pub sources: Vec<String>,
    /// Verifiable-claim signals counted into `claims_verified`.
    pub claims: Vec<String>,
    /// Citation signals for the factuality score (a superset of `sources`).
    pub factual_sources: Vec<String>,
    /// Precise-statement signals (numbers, years, "exactly", ...).
    pub precise: Vec<String>,
    /// Hedging signals ("many", "might", "seems", ...).
    pub vague: Vec<String>,
}

impl HeuristicsConfig {
    /// Built-in seed mirroring `config/heuristics.toml`. Used as fallback
    /// when no config file is present, and by tests.
    pub fn default_seed() -> Self {
        let vecs = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            trusted_domains: vecs(&[
                "nature.com",
                "science.org",
                "cell.com",
                "nejm.org",
                "bbc.com",
                "reuters.com",
                "ap.org",
                "npr.org",
                "who.int",
                "cdc.gov",
                "nih.gov",
                "edu",
            ]),
            emotional_words: vecs(&[
                "amazing",
                "terrible",
                "incredible",
                "shocking",
                "unbelievable",
                "awesome",
                "horrible",
                "fantastic",
                "disgusting",
                "perfect",
                "brilliant",
                "stupid",
                "genius",
                "idiotic",
                "wonderful",
            ]),
            patterns: PatternGroups {
                sources: vecs(&[
                    r"https?://\S+",
                    r"www\.\S+",
                    r"according to",
                    r"study shows",
                    r"research indicates",
                ]),
                claims: vecs(&[
                    r"\b\d+%",
                    r"\b\d+\s+(percent|percentage)",
                    r"study|research|survey|report",
                    r"according to|based on|shows that",
                ]),
                factual_sources: vecs(&[
                    r"according to",
                    r"study shows",
                    r"research indicates",
                    r"data from",
                    r"source:",
                    r"https?://\S+",
                    r"\([^)]*\d{4}[^)]*\)",
                ]),
                precise: vecs(&[
                    r"\b\d+(\.\d+)?%",
                    r"\b\d+(,\d{3})*(\.\d+)?\s+(people|users|participants)",
                    r"exactly|precisely|specifically",
                    r"\b\d{4}\b",
                ]),
                vague: vecs(&[
                    r"many|some|several|few",
                    r"might|could|possibly|maybe",
                    r"seems|appears|likely",
                ]),
            },
        }
    }
}

/* ----------------------------
Compiled engine structures
---------------------------- */

/// Compiled, ready-to-match form of [`HeuristicsConfig`].
#[derive(Debug)]
pub struct Heuristics {
    pub trusted_domains: Vec<String>,
    pub emotional_words: Vec<String>,
    pub source_patterns: Vec<Regex>,
    pub claim_patterns: Vec<Regex>,
    pub factual_source_patterns: Vec<Regex>,
    pub precise_patterns: Vec<Regex>,
    pub vague_patterns: Vec<Regex>,
    /// Case-sensitive on purpose: the link-density bonus only counts
    /// literal `http(s)://` links, unlike the pattern groups above.
    pub absolute_url: Regex,
}

impl Heuristics {
    /// Compile from a parsed config. Word lists are lowercased here so the
    /// match loops never re-normalize.
    pub fn from_config(cfg: &HeuristicsConfig) -> anyhow::Result<Self> {
        Ok(Self {
            trusted_domains: lowercase_all(&cfg.trusted_domains),
            emotional_words: lowercase_all(&cfg.emotional_words),
            source_patterns: compile_group("sources", &cfg.patterns.sources)?,
            claim_patterns: compile_group("claims", &cfg.patterns.claims)?,
            factual_source_patterns: compile_group(
                "factual_sources",
                &cfg.patterns.factual_sources,
            )?,
            precise_patterns: compile_group("precise", &cfg.patterns.precise)?,
            vague_patterns: compile_group("vague", &cfg.patterns.vague)?,
            absolute_url: Regex::new(r"https?://\S+")?,
        })
    }

    /// Load from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let cfg: HeuristicsConfig = toml::from_str(toml_str)?;
        Self::from_config(&cfg)
    }

    /// Resolve the config path (env override, then default), read and
    /// compile it; any failure falls back to the built-in seed.
    pub fn load_or_seed() -> Self {
        let path = std::env::var(ENV_HEURISTICS_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_HEURISTICS_CONFIG_PATH));

        match fs::read_to_string(&path) {
            Ok(raw) => match Self::from_toml_str(&raw) {
                Ok(h) => {
                    info!(path = %path.display(), "heuristics config loaded");
                    h
                }
                Err(e) => {
                    warn!(error = ?e, path = %path.display(), "heuristics config invalid, using built-in seed");
                    Self::seed()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "heuristics config missing, using built-in seed");
                Self::seed()
            }
        }
    }

    /// The built-in seed, compiled. The seed patterns are part of the
    /// crate and must always compile.
    pub fn seed() -> Self {
        Self::from_config(&HeuristicsConfig::default_seed()).expect("seed heuristics compile")
    }

    /// Sum of non-overlapping match counts across a pattern group.
    pub fn count_matches(patterns: &[Regex], text: &str) -> usize {
        patterns.iter().map(|re| re.find_iter(text).count()).sum()
    }
}

fn compile_group(group: &str, patterns: &[String]) -> anyhow::Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|e| anyhow::anyhow!("pattern group `{}`, `{}`: {}", group, p, e))
        })
        .collect()
}

fn lowercase_all(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}
