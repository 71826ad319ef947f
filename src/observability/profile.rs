//! Per-request trace and profile hooks.
//!
//! Every request is bracketed by `Profile::begin` / `Profile::end`. The
//! profile key identifies the request by method, URL and a digest of its
//! body, so identical calls group together in logs.

use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};

use crate::http::body::{log_json, RequestBody};
use crate::http::response::Outcome;
use crate::observability::metrics;

/// `METHOD url#<sha256 of body json>`
pub fn profile_key(method: &str, url: &str, body_json: &str) -> String {
    format!("{method} {url}#{:x}", Sha256::digest(body_json.as_bytes()))
}

/// An open profiling block.
#[derive(Debug)]
pub struct Profile {
    key: String,
    method: String,
    started: Instant,
}

impl Profile {
    /// Emit the "sending request" trace event and start timing.
    pub fn begin(method: &str, url: &str, body: Option<&RequestBody>) -> Self {
        let body_json = log_json(body);
        tracing::trace!(url = %url, body = %body_json, "Sending request");

        let key = profile_key(method, url, &body_json);
        tracing::debug!(profile = %key, "Begin profile");

        Self {
            key,
            method: method.to_string(),
            started: Instant::now(),
        }
    }

    /// Close the block, logging elapsed time and recording metrics.
    pub fn end(self, outcome: &Outcome) -> Duration {
        let elapsed = self.started.elapsed();
        tracing::debug!(
            profile = %self.key,
            outcome = outcome.label(),
            elapsed_ms = elapsed.as_millis() as u64,
            "End profile"
        );
        metrics::record_request(&self.method, outcome, elapsed);
        elapsed
    }
}
