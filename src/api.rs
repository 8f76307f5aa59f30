// src/api.rs
//! HTTP surface: analysis, URL analysis, search, persistence and export.
//!
//! Handlers stay thin; scoring lives in [`crate::analyze`], persistence in
//! [`crate::store`], fetching in [`crate::scrape`]. All collaborators hang
//! off [`AppState`] behind traits so the router can be exercised in tests
//! with a frozen clock and a canned fetcher.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use metrics::{counter, histogram};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::analyze::CredibilityAnalyzer;
use crate::clock::{Clock, SystemClock};
use crate::heuristics::Heuristics;
use crate::result::{AnalysisResult, Classification};
use crate::samples;
use crate::scrape::{ArticleFetcher, ArticleScraper};
use crate::store::{AnalysisStore, MemoryStore, SearchFilters, StoreStatistics, StoredAnalysis};

pub const SUPPORTED_LANGUAGES: [&str; 4] = ["de", "en", "es", "fr"];
const DEFAULT_LANGUAGE: &str = "en";

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<CredibilityAnalyzer>,
    pub store: Arc<dyn AnalysisStore>,
    pub scraper: Arc<dyn ArticleFetcher>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Production wiring: system clock, in-memory store, live scraper.
    pub fn new(heuristics: Arc<Heuristics>) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self {
            analyzer: Arc::new(CredibilityAnalyzer::new(heuristics).with_clock(clock.clone())),
            store: Arc::new(MemoryStore::with_clock(clock.clone())),
            scraper: Arc::new(ArticleScraper::new()),
            clock,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    crate::metrics::ensure_metrics_described();

    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
        .route("/api/analyze_url", post(analyze_url))
        .route("/api/search", get(search))
        .route("/api/save", post(save))
        .route("/api/statistics", get(statistics))
        .route("/api/export", get(export))
        .route("/api/example/{kind}", get(example))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

type ApiError = (StatusCode, Json<ErrorBody>);

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

fn bad_request(msg: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg.into() }))
}

fn resolve_language(requested: Option<&str>) -> String {
    match requested {
        Some(lang) => {
            let lang = lang.to_ascii_lowercase();
            if SUPPORTED_LANGUAGES.contains(&lang.as_str()) {
                lang
            } else {
                DEFAULT_LANGUAGE.to_string()
            }
        }
        None => DEFAULT_LANGUAGE.to_string(),
    }
}

/// Saves when the caller asked for it; a store failure downgrades to
/// `saved: false` instead of failing the analysis response.
fn persist(
    state: &AppState,
    result: &AnalysisResult,
    tags: &str,
    notes: &str,
) -> (bool, Option<u64>) {
    match state.store.save(result, tags, notes) {
        Ok(id) => {
            counter!("store_saves_total").increment(1);
            (true, Some(id))
        }
        Err(e) => {
            warn!(error = ?e, "saving analysis failed");
            (false, None)
        }
    }
}

#[derive(serde::Deserialize)]
struct AnalyzeRequest {
    content: Option<String>,
    language: Option<String>,
    #[serde(default)]
    save: bool,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    notes: String,
}

#[derive(serde::Serialize)]
struct AnalyzeResponse {
    #[serde(flatten)]
    result: AnalysisResult,
    #[serde(skip_serializing_if = "is_false")]
    scraped: bool,
    #[serde(skip_serializing_if = "is_false")]
    saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_id: Option<u64>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Some(content) = body.content else {
        return Err(bad_request("no content in request"));
    };

    counter!("analyze_requests_total").increment(1);
    let mut result = state.analyzer.analyze(&content, None, None);
    result.language = resolve_language(body.language.as_deref());
    histogram!("analyze_processing_seconds").record(result.processing_time);
    if result.error.is_some() {
        counter!("analyze_degenerate_total").increment(1);
    }

    // Degenerate results are returned but never persisted.
    let (saved, saved_id) = if body.save && result.error.is_none() {
        persist(&state, &result, &body.tags, &body.notes)
    } else {
        (false, None)
    };

    Ok(Json(AnalyzeResponse {
        result,
        scraped: false,
        saved,
        saved_id,
    }))
}

#[derive(serde::Deserialize)]
struct AnalyzeUrlRequest {
    url: Option<String>,
    language: Option<String>,
    #[serde(default)]
    save: bool,
}

async fn analyze_url(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeUrlRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Some(url) = body.url else {
        return Err(bad_request("no url in request"));
    };
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(bad_request("url must start with http:// or https://"));
    }

    let article = match state.scraper.scrape_article(&url).await {
        Ok(a) => a,
        Err(e) => return Err(bad_request(format!("{e:#}"))),
    };

    counter!("analyze_requests_total").increment(1);
    let mut result = state
        .analyzer
        .analyze(&article.content, Some(&url), Some(&article.metadata));
    result.language = resolve_language(body.language.as_deref());
    histogram!("analyze_processing_seconds").record(result.processing_time);
    if result.error.is_some() {
        counter!("analyze_degenerate_total").increment(1);
    }

    let (saved, saved_id) = if body.save && result.error.is_none() {
        persist(&state, &result, "", "")
    } else {
        (false, None)
    };

    Ok(Json(AnalyzeResponse {
        result,
        scraped: true,
        saved,
        saved_id,
    }))
}

#[derive(serde::Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
    classification: Option<String>,
    min_words: Option<usize>,
    max_words: Option<usize>,
    date_from: Option<String>,
    date_to: Option<String>,
}

#[derive(serde::Serialize)]
struct SearchResponse {
    query: String,
    results: Vec<StoredAnalysis>,
    total: usize,
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let classification = match params.classification.as_deref() {
        Some(raw) => match Classification::parse(raw) {
            Some(c) => Some(c),
            None => return Err(bad_request(format!("unknown classification `{raw}`"))),
        },
        None => None,
    };

    let filters = SearchFilters {
        classification,
        min_words: params.min_words,
        max_words: params.max_words,
        date_from: params.date_from,
        date_to: params.date_to,
    };
    let results = state.store.search(&params.q, &filters);

    Ok(Json(SearchResponse {
        total: results.len(),
        query: params.q,
        results,
    }))
}

#[derive(serde::Deserialize)]
struct SaveRequest {
    #[serde(flatten)]
    result: AnalysisResult,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    notes: String,
}

#[derive(serde::Serialize)]
struct SaveResponse {
    success: bool,
    id: u64,
    message: &'static str,
}

async fn save(
    State(state): State<AppState>,
    Json(body): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    if body.result.content.trim().is_empty() {
        return Err(bad_request("no analysis content to save"));
    }

    match state.store.save(&body.result, &body.tags, &body.notes) {
        Ok(id) => {
            counter!("store_saves_total").increment(1);
            Ok(Json(SaveResponse {
                success: true,
                id,
                message: "analysis saved",
            }))
        }
        Err(e) => {
            warn!(error = ?e, "saving posted analysis failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "failed to save analysis".to_string(),
                }),
            ))
        }
    }
}

async fn statistics(State(state): State<AppState>) -> Json<StoreStatistics> {
    Json(state.store.statistics())
}

#[derive(serde::Serialize)]
struct ExportResponse {
    export_date: String,
    total_records: usize,
    data: Vec<StoredAnalysis>,
}

async fn export(State(state): State<AppState>) -> Json<ExportResponse> {
    let data = state.store.export();
    Json(ExportResponse {
        export_date: state.clock.now().to_rfc3339(),
        total_records: data.len(),
        data,
    })
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let stats = state.store.statistics();
    Json(json!({
        "status": "healthy",
        "analyzers_available": {
            "heuristics": true,
            "web_scraper": true,
            "quality_model": state.analyzer.model_available(),
        },
        "quality_model": state.analyzer.model_name(),
        "store_status": "connected",
        "total_analyses": stats.total_analyses,
        "supported_languages": SUPPORTED_LANGUAGES,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": state.clock.now().to_rfc3339(),
    }))
}

#[derive(serde::Serialize)]
struct ExampleResponse {
    content: &'static str,
}

async fn example(Path(kind): Path<String>) -> Result<Json<ExampleResponse>, ApiError> {
    match samples::sample(&kind) {
        Some(content) => Ok(Json(ExampleResponse { content })),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: "example content not found".to_string(),
            }),
        )),
    }
}
