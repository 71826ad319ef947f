//! Request metrics.
//!
//! # Metrics
//! - `http_component_requests_total` (counter): requests by method, outcome
//! - `http_component_request_duration_seconds` (histogram): latency by method
//!
//! Recorded through the `metrics` facade; without an installed recorder the
//! calls are no-ops.

use std::time::Duration;

use crate::http::response::Outcome;

pub const REQUESTS_TOTAL: &str = "http_component_requests_total";
pub const REQUEST_DURATION: &str = "http_component_request_duration_seconds";

/// Record one finished request.
pub fn record_request(method: &str, outcome: &Outcome, elapsed: Duration) {
    metrics::counter!(
        REQUESTS_TOTAL,
        "method" => method.to_string(),
        "outcome" => outcome.label()
    )
    .increment(1);
    metrics::histogram!(REQUEST_DURATION, "method" => method.to_string())
        .record(elapsed.as_secs_f64());
}
