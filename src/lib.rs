// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyze;
pub mod api;
pub mod clock;
pub mod heuristics;
pub mod metrics;
pub mod result;
pub mod samples;
pub mod scrape;
pub mod store;

// ---- Re-exports for stable public API ----
pub use crate::analyze::CredibilityAnalyzer;
pub use crate::api::create_router;
pub use crate::result::{AnalysisResult, Classification, SourceMetadata};
