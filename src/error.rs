//! Error types for HTTP component operations.

use thiserror::Error;

/// Errors that can occur while executing a request.
///
/// A 404 response is not an error: the request methods report it as
/// `Ok(None)` (or `Ok(false)` for HEAD).
#[derive(Debug, Error)]
pub enum HttpComponentError {
    /// Server answered with a status outside 2xx that is not 404.
    #[error("HTTP error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, used as the error message.
        body: String,
    },

    /// Connect or overall request deadline elapsed.
    #[error("Request timeout")]
    Timeout,

    /// Could not establish a connection.
    #[error("Connection error: {0}")]
    Connect(String),

    /// Any other transport-level failure.
    #[error("Request failed: {0}")]
    Transport(String),

    /// Response body was not valid JSON for the requested type.
    #[error("Failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Raw body requested as text but not valid UTF-8.
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// URL could not be parsed by the underlying client.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Method name is not a valid HTTP token.
    #[error("Invalid HTTP method '{0}'")]
    InvalidMethod(String),

    /// Client could not be built from the configuration.
    #[error("Client build error: {0}")]
    Build(String),
}

impl HttpComponentError {
    /// Status code carried by a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpComponentError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the error came from the network rather than the server's answer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            HttpComponentError::Timeout
                | HttpComponentError::Connect(_)
                | HttpComponentError::Transport(_)
        )
    }
}

impl From<reqwest::Error> for HttpComponentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpComponentError::Timeout
        } else if err.is_connect() {
            HttpComponentError::Connect(err.to_string())
        } else if err.is_builder() {
            HttpComponentError::Build(err.to_string())
        } else {
            HttpComponentError::Transport(err.to_string())
        }
    }
}

/// Result type for HTTP component operations.
pub type Result<T> = std::result::Result<T, HttpComponentError>;
