//! # Analysis Result Types
//!
//! The wire-facing data model: sub-scores, the classification ladder,
//! scraped/source metadata, and the flat [`AnalysisResult`] record the
//! API returns and the store persists.

use serde::{Deserialize, Serialize};

/// Credibility bands, ordered from most to least trustworthy.
///
/// Serialized lowercase ("high", "medium", "low", "questionable").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    High,
    Medium,
    Low,
    #[default]
    Questionable,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::High => "high",
            Classification::Medium => "medium",
            Classification::Low => "low",
            Classification::Questionable => "questionable",
        }
    }

    /// Case-insensitive parse of the wire form.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "high" => Some(Classification::High),
            "medium" => Some(Classification::Medium),
            "low" => Some(Classification::Low),
            "questionable" => Some(Classification::Questionable),
            _ => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three dimension scores, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub quality: f32,
    pub factual: f32,
    pub source_reliability: f32,
}

/// Provenance of an analyzed document. All fields optional in practice;
/// empty strings mean "unknown" on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publication_date: String,
    #[serde(default)]
    pub domain: String,
}

/// Complete outcome of one analysis. Flat on the wire: feature counts,
/// sub-scores, verdict, provenance and advice all at one level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub credibility_score: f32,
    pub content_quality_score: f32,
    pub factual_accuracy_score: f32,
    pub source_reliability_score: f32,
    pub classification: Classification,
    pub confidence: f32,

    pub word_count: usize,
    pub sentence_count: usize,
    pub char_count: usize,
    pub avg_sentence_length: f32,
    pub sources_found: usize,
    pub claims_verified: usize,
    pub readability_score: f32,
    pub bias_level: f32,

    pub processing_time: f64,

    pub content: String,
    pub url: String,
    pub title: String,
    pub author: String,
    pub domain: String,
    pub publication_date: String,
    pub language: String,

    pub recommendations: Vec<String>,
    pub issues_detected: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    pub fn sub_scores(&self) -> SubScores {
        SubScores {
            quality: self.content_quality_score,
            factual: self.factual_accuracy_score,
            source_reliability: self.source_reliability_score,
        }
    }
}
