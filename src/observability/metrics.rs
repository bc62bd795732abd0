//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests served, by endpoint
//! - `http_request_duration_seconds` (histogram): handler latency, by endpoint
//!
//! Without an installed exporter the macros below are no-ops.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one served request.
pub fn record_request(endpoint: &'static str, start: Instant) {
    metrics::counter!("http_requests_total", "endpoint" => endpoint).increment(1);
    metrics::histogram!("http_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}
