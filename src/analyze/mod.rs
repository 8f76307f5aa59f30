// src/analyze/mod.rs
//! # Credibility Analysis Pipeline
//!
//! Feature extraction, the three dimension scorers, the weighted
//! combiner, and the advice pass, orchestrated by
//! [`CredibilityAnalyzer`]. The pipeline is pure: same text, same
//! heuristics, same clock instant, same result.

pub mod advice;
pub mod combine;
pub mod factual;
pub mod features;
pub mod model;
pub mod quality;
pub mod readability;
pub mod source;

use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::heuristics::Heuristics;
use crate::result::{AnalysisResult, Classification, SourceMetadata, SubScores};

/// Shortest content (after trimming, in characters) worth scoring.
pub const MIN_CONTENT_CHARS: usize = 10;

const DEGENERATE_SCORE: f32 = 0.5;
const DEFAULT_LANGUAGE: &str = "en";

pub(crate) fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Short stable id for logging content without logging the content.
pub(crate) fn anon_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    digest[..6].iter().map(|b| format!("{b:02x}")).collect()
}

pub struct CredibilityAnalyzer {
    heuristics: Arc<Heuristics>,
    clock: Arc<dyn Clock>,
    model: Arc<dyn model::QualityModel>,
}

impl CredibilityAnalyzer {
    pub fn new(heuristics: Arc<Heuristics>) -> Self {
        Self {
            heuristics,
            clock: Arc::new(SystemClock),
            model: Arc::new(model::DisabledModel),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_model(mut self, model: Arc<dyn model::QualityModel>) -> Self {
        self.model = model;
        self
    }

    pub fn model_available(&self) -> bool {
        self.model.available()
    }

    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    /// Score one document. `url` and `metadata` are provenance from the
    /// caller (typically the scraper); both are optional and only affect
    /// the source-reliability dimension and the echoed fields.
    pub fn analyze(
        &self,
        content: &str,
        url: Option<&str>,
        metadata: Option<&SourceMetadata>,
    ) -> AnalysisResult {
        if content.trim().chars().count() < MIN_CONTENT_CHARS {
            return self.degenerate(content, url, metadata);
        }

        let started = self.clock.now();
        let features = features::extract(content, &self.heuristics);
        debug!(
            id = %anon_hash(content),
            words = features.word_count,
            sources = features.sources_found,
            "features extracted"
        );

        let scores = SubScores {
            quality: quality::score(content, &features),
            factual: factual::score(content, &features, &self.heuristics),
            source_reliability: source::score(content, url, metadata, &self.heuristics, started),
        };
        let (credibility, confidence) = combine::combine(&scores);
        let classification = combine::classify(credibility, confidence);

        let recommendations = advice::recommendations(&scores, &features);
        let issues_detected = advice::detect_issues(content, &features);

        let elapsed = self.clock.now() - started;
        let processing_time = elapsed
            .num_microseconds()
            .map(|us| us as f64 / 1_000_000.0)
            .unwrap_or(0.0);

        let meta = metadata.cloned().unwrap_or_default();
        AnalysisResult {
            credibility_score: credibility,
            content_quality_score: scores.quality,
            factual_accuracy_score: scores.factual,
            source_reliability_score: scores.source_reliability,
            classification,
            confidence,
            word_count: features.word_count,
            sentence_count: features.sentence_count,
            char_count: features.char_count,
            avg_sentence_length: features.avg_sentence_length,
            sources_found: features.sources_found,
            claims_verified: features.claims_verified,
            readability_score: features.readability_score,
            bias_level: features.bias_level,
            processing_time,
            content: content.to_string(),
            url: url.unwrap_or_default().to_string(),
            title: meta.title,
            author: meta.author,
            domain: meta.domain,
            publication_date: meta.publication_date,
            language: DEFAULT_LANGUAGE.to_string(),
            recommendations,
            issues_detected,
            error: None,
        }
    }

    /// Neutral verdict for content too short to score. Zero confidence,
    /// zeroed features, provenance passed through untouched.
    fn degenerate(
        &self,
        content: &str,
        url: Option<&str>,
        metadata: Option<&SourceMetadata>,
    ) -> AnalysisResult {
        let meta = metadata.cloned().unwrap_or_default();
        AnalysisResult {
            credibility_score: DEGENERATE_SCORE,
            classification: Classification::Questionable,
            confidence: 0.0,
            content: content.to_string(),
            url: url.unwrap_or_default().to_string(),
            title: meta.title,
            author: meta.author,
            domain: meta.domain,
            publication_date: meta.publication_date,
            language: DEFAULT_LANGUAGE.to_string(),
            error: Some("Content too short or invalid".to_string()),
            ..Default::default()
        }
    }
}
