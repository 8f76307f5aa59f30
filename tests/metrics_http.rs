// tests/metrics_http.rs
//
// /metrics exposition through the merged router. Kept to a single test:
// the Prometheus recorder installs once per process.

use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt as _;

use credibility_guard::analyze::CredibilityAnalyzer;
use credibility_guard::api::{create_router, AppState};
use credibility_guard::clock::SystemClock;
use credibility_guard::heuristics::Heuristics;
use credibility_guard::metrics::Metrics;
use credibility_guard::scrape::ArticleScraper;
use credibility_guard::store::MemoryStore;

#[tokio::test]
async fn metrics_endpoint_exposes_analysis_series() {
    let metrics = Metrics::init();
    let state = AppState {
        analyzer: Arc::new(CredibilityAnalyzer::new(Arc::new(Heuristics::seed()))),
        store: Arc::new(MemoryStore::new()),
        scraper: Arc::new(ArticleScraper::new()),
        clock: Arc::new(SystemClock),
    };
    let app = create_router(state).merge(metrics.router());

    // One healthy analysis and one degenerate, so both counters have samples.
    let healthy = json!({ "content": "A plain paragraph of readable text for the scorer to work on." });
    let resp = app
        .clone()
        .oneshot(
            Request::post("/api/analyze")
                .header("content-type", "application/json")
                .body(Body::from(healthy.to_string()))
                .expect("build analyze request"),
        )
        .await
        .expect("oneshot analyze");
    assert_eq!(resp.status(), StatusCode::OK);

    let short = json!({ "content": "hi" });
    let resp = app
        .clone()
        .oneshot(
            Request::post("/api/analyze")
                .header("content-type", "application/json")
                .body(Body::from(short.to_string()))
                .expect("build analyze request"),
        )
        .await
        .expect("oneshot analyze");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(
            Request::get("/metrics")
                .body(Body::empty())
                .expect("build metrics request"),
        )
        .await
        .expect("oneshot metrics");
    assert_eq!(resp.status(), StatusCode::OK);

    // axum::body::to_bytes requires an explicit limit
    let bytes = body::to_bytes(resp.into_body(), 1_048_576)
        .await
        .expect("read exposition"); // 1 MiB
    let text = String::from_utf8(bytes.to_vec()).expect("utf8 exposition");

    for needle in [
        "analyze_requests_total",
        "analyze_degenerate_total",
        "analyze_processing_seconds",
    ] {
        assert!(
            text.contains(needle),
            "metrics exposition missing '{needle}'\n{text}"
        );
    }
}
