use axum::{routing::get, Router};
use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Initialize the Prometheus recorder.
    pub fn init() -> Self {
        // Use default buckets to avoid API differences across crate versions.
        let builder = PrometheusBuilder::new();

        let handle = builder
            .install_recorder()
            .expect("prometheus: install recorder");

        ensure_metrics_described();

        Self { handle }
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

/// One-time metrics registration (so series show up on /metrics).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("analyze_requests_total", "Texts scored by the analyzer.");
        describe_counter!(
            "analyze_degenerate_total",
            "Requests rejected as too short to score."
        );
        describe_counter!("scrape_requests_total", "Article fetch attempts.");
        describe_counter!("scrape_failures_total", "Article fetches that failed.");
        describe_counter!("store_saves_total", "Analysis records persisted.");
        describe_histogram!(
            "analyze_processing_seconds",
            "End-to-end scoring time in seconds."
        );
        describe_histogram!("scrape_fetch_ms", "Article fetch + extraction time in milliseconds.");
    });
}
