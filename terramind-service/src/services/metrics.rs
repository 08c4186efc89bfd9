//! Analysis-specific Prometheus metrics, registered into the shared
//! service-core registry alongside the HTTP metrics.

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};
use std::sync::OnceLock;

pub static ANALYSIS_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static ANALYSIS_FALLBACKS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static ANALYSIS_DURATION_SECONDS: OnceLock<HistogramVec> = OnceLock::new();

/// Initialize all metrics. Must be called once at startup; extra calls are
/// no-ops so tests can share a process.
pub fn init_metrics() {
    if ANALYSIS_REQUESTS_TOTAL.get().is_some() {
        return;
    }

    service_core::metrics::init_http_metrics();
    let registry = service_core::metrics::registry().expect("metrics registry is initialized");

    let analysis_requests = IntCounterVec::new(
        Opts::new("analysis_requests_total", "Total analysis requests served"),
        &["mode", "analysis_type"],
    )
    .expect("Failed to create analysis_requests_total metric");

    let analysis_fallbacks = IntCounterVec::new(
        Opts::new(
            "analysis_fallbacks_total",
            "Production analyses that fell back to the demo generator",
        ),
        &["reason"],
    )
    .expect("Failed to create analysis_fallbacks_total metric");

    let analysis_duration = HistogramVec::new(
        HistogramOpts::new(
            "analysis_duration_seconds",
            "End-to-end analysis duration in seconds",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["mode"],
    )
    .expect("Failed to create analysis_duration_seconds metric");

    registry
        .register(Box::new(analysis_requests.clone()))
        .expect("Failed to register analysis_requests_total");
    registry
        .register(Box::new(analysis_fallbacks.clone()))
        .expect("Failed to register analysis_fallbacks_total");
    registry
        .register(Box::new(analysis_duration.clone()))
        .expect("Failed to register analysis_duration_seconds");

    let _ = ANALYSIS_REQUESTS_TOTAL.set(analysis_requests);
    let _ = ANALYSIS_FALLBACKS_TOTAL.set(analysis_fallbacks);
    let _ = ANALYSIS_DURATION_SECONDS.set(analysis_duration);

    tracing::info!("Prometheus metrics initialized");
}

/// Record a completed analysis.
pub fn record_analysis(mode: &str, analysis_type: &str, duration_secs: f64) {
    if let Some(counter) = ANALYSIS_REQUESTS_TOTAL.get() {
        counter.with_label_values(&[mode, analysis_type]).inc();
    }
    if let Some(histogram) = ANALYSIS_DURATION_SECONDS.get() {
        histogram.with_label_values(&[mode]).observe(duration_secs);
    }
}

/// Record a production-to-demo fallback.
pub fn record_fallback(reason: &str) {
    if let Some(counter) = ANALYSIS_FALLBACKS_TOTAL.get() {
        counter.with_label_values(&[reason]).inc();
    }
}
