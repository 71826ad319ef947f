//! Response status classification and body decoding.

use serde::de::DeserializeOwned;

use crate::error::{HttpComponentError, Result};

/// How a finished exchange ended, for logs and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success(u16),
    NotFound,
    Status(u16),
    Timeout,
    Connect,
    Transport,
}

impl Outcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Outcome::Success(status),
            404 => Outcome::NotFound,
            other => Outcome::Status(other),
        }
    }

    pub fn from_error(err: &HttpComponentError) -> Self {
        match err {
            HttpComponentError::Timeout => Outcome::Timeout,
            HttpComponentError::Connect(_) => Outcome::Connect,
            HttpComponentError::Status { status, .. } => Outcome::Status(*status),
            _ => Outcome::Transport,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::NotFound => "not_found",
            Outcome::Status(_) => "error_status",
            Outcome::Timeout => "timeout",
            Outcome::Connect => "connect",
            Outcome::Transport => "transport",
        }
    }
}

/// Map a status and body to the component's return contract.
///
/// 2xx yields the body, 404 yields `None`, anything else is a `Status` error.
pub fn into_reply(status: u16, body: Vec<u8>) -> Result<Option<Vec<u8>>> {
    match Outcome::from_status(status) {
        Outcome::Success(_) => Ok(Some(body)),
        Outcome::NotFound => Ok(None),
        _ => Err(HttpComponentError::Status {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        }),
    }
}

/// Decode a response body as JSON. An empty body decodes as `null`.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    let text = if body.trim().is_empty() { "null" } else { body };
    Ok(serde_json::from_str(text)?)
}
