//! Request bodies.

use reqwest::header::{HeaderValue, CONTENT_TYPE};

use crate::http::params::Params;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Body attached to a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Encoded like query parameters.
    Form(Params),
    /// Sent verbatim, typed as form data like a posted field string.
    Raw(String),
    /// Serialized as `application/json`.
    Json(serde_json::Value),
}

impl From<Params> for RequestBody {
    fn from(params: Params) -> Self {
        RequestBody::Form(params)
    }
}

impl From<String> for RequestBody {
    fn from(raw: String) -> Self {
        RequestBody::Raw(raw)
    }
}

impl From<&str> for RequestBody {
    fn from(raw: &str) -> Self {
        RequestBody::Raw(raw.to_string())
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        RequestBody::Json(value)
    }
}

impl RequestBody {
    pub(crate) fn content_type(&self) -> HeaderValue {
        match self {
            RequestBody::Form(_) | RequestBody::Raw(_) => HeaderValue::from_static(FORM_URLENCODED),
            RequestBody::Json(_) => HeaderValue::from_static("application/json"),
        }
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        match self {
            RequestBody::Form(params) => params.encode().into_bytes(),
            RequestBody::Raw(raw) => raw.into_bytes(),
            RequestBody::Json(value) => value.to_string().into_bytes(),
        }
    }

    /// Attach this body and its content type to a request.
    pub(crate) fn apply(self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(CONTENT_TYPE, self.content_type())
            .body(self.into_bytes())
    }
}

/// JSON rendering of an optional body for trace logs and profile keys.
pub fn log_json(body: Option<&RequestBody>) -> String {
    let value = match body {
        None => serde_json::Value::Null,
        Some(RequestBody::Form(params)) => params.to_json(),
        Some(RequestBody::Raw(raw)) => serde_json::Value::String(raw.clone()),
        Some(RequestBody::Json(value)) => value.clone(),
    };
    value.to_string()
}
