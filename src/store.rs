//! # Analysis Store
//!
//! Persistence behind the save/search/statistics/export operations.
//! [`AnalysisStore`] is the seam; [`MemoryStore`] is the bundled
//! implementation: a capped, mutex-guarded vector with monotonically
//! increasing ids.
//!
//! Search semantics:
//! - empty query returns the most recent records;
//! - a query is a case-insensitive substring match over content, title,
//!   author, domain, classification, tags and notes;
//! - results are newest first, at most [`SEARCH_LIMIT`];
//! - date filters prefix-compare RFC 3339 strings, so a plain
//!   `2025-06-01` bound covers that whole day.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::result::{AnalysisResult, Classification};

pub const SEARCH_LIMIT: usize = 100;
const MAX_RECORDS: usize = 10_000;

/// One persisted analysis. Flat on the wire: the result fields sit next
/// to the store envelope (id, timestamps, tags, notes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub id: u64,
    pub created_at: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub notes: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub classification: Option<Classification>,
    pub min_words: Option<usize>,
    pub max_words: Option<usize>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreStatistics {
    pub total_analyses: usize,
    pub credibility_distribution: BTreeMap<String, usize>,
    pub average_credibility: f64,
    pub average_confidence: f64,
    pub average_word_count: f64,
    pub average_sources: f64,
}

impl StoreStatistics {
    /// Neutral defaults for an empty store.
    pub fn empty() -> Self {
        Self {
            total_analyses: 0,
            credibility_distribution: BTreeMap::new(),
            average_credibility: 0.5,
            average_confidence: 0.0,
            average_word_count: 0.0,
            average_sources: 0.0,
        }
    }
}

pub trait AnalysisStore: Send + Sync {
    /// Persist a result, returning its assigned id.
    fn save(&self, result: &AnalysisResult, tags: &str, notes: &str) -> anyhow::Result<u64>;
    fn search(&self, query: &str, filters: &SearchFilters) -> Vec<StoredAnalysis>;
    fn statistics(&self) -> StoreStatistics;
    /// Every record, oldest first.
    fn export(&self) -> Vec<StoredAnalysis>;
}

pub struct MemoryStore {
    records: Mutex<Vec<StoredAnalysis>>,
    next_id: AtomicU64,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            clock,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisStore for MemoryStore {
    fn save(&self, result: &AnalysisResult, tags: &str, notes: &str) -> anyhow::Result<u64> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = StoredAnalysis {
            id,
            created_at: self.clock.now().to_rfc3339(),
            tags: tags.to_string(),
            notes: notes.to_string(),
            result: result.clone(),
        };

        let mut records = self
            .records
            .lock()
            .map_err(|_| anyhow!("store mutex poisoned"))?;
        records.push(record);
        if records.len() > MAX_RECORDS {
            let excess = records.len() - MAX_RECORDS;
            records.drain(0..excess);
        }
        Ok(id)
    }

    fn search(&self, query: &str, filters: &SearchFilters) -> Vec<StoredAnalysis> {
        let records = match self.records.lock() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };
        let needle = query.trim().to_lowercase();

        records
            .iter()
            .rev()
            .filter(|r| needle.is_empty() || matches_query(r, &needle))
            .filter(|r| matches_filters(r, filters))
            .take(SEARCH_LIMIT)
            .cloned()
            .collect()
    }

    fn statistics(&self) -> StoreStatistics {
        let records = match self.records.lock() {
            Ok(guard) => guard,
            Err(_) => return StoreStatistics::empty(),
        };
        if records.is_empty() {
            return StoreStatistics::empty();
        }

        let n = records.len() as f64;
        let mut distribution: BTreeMap<String, usize> = BTreeMap::new();
        let mut credibility = 0.0f64;
        let mut confidence = 0.0f64;
        let mut words = 0.0f64;
        let mut sources = 0.0f64;
        for r in records.iter() {
            *distribution
                .entry(r.result.classification.as_str().to_string())
                .or_insert(0) += 1;
            credibility += r.result.credibility_score as f64;
            confidence += r.result.confidence as f64;
            words += r.result.word_count as f64;
            sources += r.result.sources_found as f64;
        }

        StoreStatistics {
            total_analyses: records.len(),
            credibility_distribution: distribution,
            average_credibility: credibility / n,
            average_confidence: confidence / n,
            average_word_count: words / n,
            average_sources: sources / n,
        }
    }

    fn export(&self) -> Vec<StoredAnalysis> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => Vec::new(),
        }
    }
}

fn matches_query(record: &StoredAnalysis, needle: &str) -> bool {
    let r = &record.result;
    [
        r.content.as_str(),
        r.title.as_str(),
        r.author.as_str(),
        r.domain.as_str(),
        r.classification.as_str(),
        record.tags.as_str(),
        record.notes.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn matches_filters(record: &StoredAnalysis, filters: &SearchFilters) -> bool {
    if let Some(class) = filters.classification {
        if record.result.classification != class {
            return false;
        }
    }
    if let Some(min) = filters.min_words {
        if record.result.word_count < min {
            return false;
        }
    }
    if let Some(max) = filters.max_words {
        if record.result.word_count > max {
            return false;
        }
    }
    if let Some(from) = &filters.date_from {
        let prefix = record.created_at.get(..from.len()).unwrap_or(&record.created_at);
        if prefix < from.as_str() {
            return false;
        }
    }
    if let Some(to) = &filters.date_to {
        let prefix = record.created_at.get(..to.len()).unwrap_or(&record.created_at);
        if prefix > to.as_str() {
            return false;
        }
    }
    true
}
