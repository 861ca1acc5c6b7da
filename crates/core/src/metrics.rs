//! Metrics definitions for the API.
//!
//! Metrics are collected using the `metrics` crate and can be exported
//! to Prometheus via `metrics-exporter-prometheus`.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use std::time::Instant;

/// Initialize all metric descriptions.
/// Call this once at startup before any metrics are recorded.
pub fn init_metrics() {
    describe_counter!(
        "videos_created_total",
        "Total number of videos created through the mutation surface"
    );
    describe_counter!(
        "node_lookups_total",
        "Total number of global-id node lookups, labelled by outcome"
    );
    describe_histogram!(
        "graphql_request_duration_seconds",
        "Time taken to execute a GraphQL request in seconds"
    );
}

/// Record a successfully created video.
pub fn record_video_created() {
    counter!("videos_created_total").increment(1);
}

/// Record a node lookup and whether it found an entity.
pub fn record_node_lookup(found: bool) {
    let outcome = if found { "found" } else { "missing" };
    counter!("node_lookups_total", "outcome" => outcome).increment(1);
}

/// Record GraphQL request execution duration.
pub fn record_request_duration(duration_secs: f64) {
    histogram!("graphql_request_duration_seconds").record(duration_secs);
}

/// A timer that automatically records request duration when dropped.
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new request timer.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for RequestTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_request_duration(duration);
    }
}
