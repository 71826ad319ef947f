//! HTTP component: request helpers over a pooled `reqwest` client.
//!
//! # Responsibilities
//! - Translate `ClientConfig` into client options (timeouts, user agent, headers)
//! - Build request URLs from targets and query options
//! - Execute requests and map status codes to return values or errors
//! - Bracket every request with trace/profile hooks

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{HttpComponentError, Result};
use crate::http::body::RequestBody;
use crate::http::params::Params;
use crate::http::response::{decode_json, into_reply, Outcome};
use crate::http::target::{create_url, Target};
use crate::observability::Profile;

/// Helper for issuing GET/HEAD/POST/PUT/DELETE requests.
///
/// Raw methods (`get`, `post`, ...) return the body as a string, unmodified
/// apart from a strict UTF-8 check; the `_json` variants decode it. In both cases a 404 yields `Ok(None)` and any other
/// non-2xx status yields [`HttpComponentError::Status`].
#[derive(Clone)]
pub struct HttpComponent {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpComponent {
    /// Create a component from configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| HttpComponentError::Build(format!("header '{name}': {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| HttpComponentError::Build(format!("header '{name}': {e}")))?;
            headers.insert(header_name, header_value);
        }

        let redirect = if config.max_redirects == 0 {
            Policy::none()
        } else {
            Policy::limited(config.max_redirects)
        };

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(redirect);
        if let Some(timeout) = config.connection_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.data_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| HttpComponentError::Build(e.to_string()))?;

        tracing::debug!(
            user_agent = %config.user_agent,
            connection_timeout_secs = ?config.connection_timeout_secs,
            data_timeout_secs = ?config.data_timeout_secs,
            "HTTP component initialized"
        );

        Ok(Self { client, config })
    }

    /// Configuration this component was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET, returning the raw body.
    pub async fn get(&self, target: impl Into<Target>, options: &Params) -> Result<Option<String>> {
        let url = create_url(&target.into(), options);
        self.request("GET", &url, None).await
    }

    /// GET, decoding the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        target: impl Into<Target>,
        options: &Params,
    ) -> Result<Option<T>> {
        decode_reply(self.get(target, options).await?)
    }

    /// HEAD. `true` for 2xx, `false` for 404.
    pub async fn head(
        &self,
        target: impl Into<Target>,
        options: &Params,
        body: Option<RequestBody>,
    ) -> Result<bool> {
        let url = create_url(&target.into(), options);
        Ok(self.request("HEAD", &url, body).await?.is_some())
    }

    /// POST, returning the raw body.
    pub async fn post(
        &self,
        target: impl Into<Target>,
        options: &Params,
        body: Option<RequestBody>,
    ) -> Result<Option<String>> {
        let url = create_url(&target.into(), options);
        self.request("POST", &url, body).await
    }

    /// POST, decoding the body as JSON.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        target: impl Into<Target>,
        options: &Params,
        body: Option<RequestBody>,
    ) -> Result<Option<T>> {
        decode_reply(self.post(target, options, body).await?)
    }

    /// PUT, returning the raw body.
    pub async fn put(
        &self,
        target: impl Into<Target>,
        options: &Params,
        body: Option<RequestBody>,
    ) -> Result<Option<String>> {
        let url = create_url(&target.into(), options);
        self.request("PUT", &url, body).await
    }

    /// PUT, decoding the body as JSON.
    pub async fn put_json<T: DeserializeOwned>(
        &self,
        target: impl Into<Target>,
        options: &Params,
        body: Option<RequestBody>,
    ) -> Result<Option<T>> {
        decode_reply(self.put(target, options, body).await?)
    }

    /// DELETE, returning the raw body.
    pub async fn delete(
        &self,
        target: impl Into<Target>,
        options: &Params,
        body: Option<RequestBody>,
    ) -> Result<Option<String>> {
        let url = create_url(&target.into(), options);
        self.request("DELETE", &url, body).await
    }

    /// DELETE, decoding the body as JSON.
    pub async fn delete_json<T: DeserializeOwned>(
        &self,
        target: impl Into<Target>,
        options: &Params,
        body: Option<RequestBody>,
    ) -> Result<Option<T>> {
        decode_reply(self.delete(target, options, body).await?)
    }

    /// Execute a request against a fully built URL.
    ///
    /// The method name is upper-cased. Returns the body for 2xx (empty for
    /// HEAD), `None` for 404. A body that is not valid UTF-8 is an
    /// [`HttpComponentError::InvalidUtf8`] error; use
    /// [`request_bytes`](Self::request_bytes) for binary responses.
    pub async fn request(
        &self,
        method: &str,
        url: &str,
        body: Option<RequestBody>,
    ) -> Result<Option<String>> {
        match self.request_bytes(method, url, body).await? {
            Some(bytes) => Ok(Some(String::from_utf8(bytes)?)),
            None => Ok(None),
        }
    }

    /// Like [`request`](Self::request), returning the body bytes exactly as received.
    pub async fn request_bytes(
        &self,
        method: &str,
        url: &str,
        body: Option<RequestBody>,
    ) -> Result<Option<Vec<u8>>> {
        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|_| HttpComponentError::InvalidMethod(method.to_string()))?;
        let parsed = Url::parse(url).map_err(|e| HttpComponentError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let profile = Profile::begin(method.as_str(), url, body.as_ref());
        let result = self.execute(method, parsed, body).await;
        let outcome = match &result {
            Ok((status, _)) => Outcome::from_status(*status),
            Err(e) => Outcome::from_error(e),
        };
        profile.end(&outcome);

        let (status, bytes) = result?;
        if let Outcome::Status(_) = outcome {
            tracing::warn!(status, url = %url, "Request returned error status");
        }
        into_reply(status, bytes)
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<RequestBody>,
    ) -> Result<(u16, Vec<u8>)> {
        let is_head = method == Method::HEAD;
        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = body.apply(builder);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let bytes = if is_head {
            Vec::new()
        } else {
            response.bytes().await?.to_vec()
        };
        Ok((status, bytes))
    }
}

fn decode_reply<T: DeserializeOwned>(reply: Option<String>) -> Result<Option<T>> {
    reply.map(|body| decode_json(&body)).transpose()
}

impl std::fmt::Debug for HttpComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpComponent")
            .field("user_agent", &self.config.user_agent)
            .field("connection_timeout_secs", &self.config.connection_timeout_secs)
            .field("data_timeout_secs", &self.config.data_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_defaults() {
        let component = HttpComponent::new(ClientConfig::default()).unwrap();
        assert!(format!("{component:?}").contains("HttpComponent"));
    }

    #[test]
    fn test_new_rejects_bad_header() {
        let mut config = ClientConfig::default();
        config
            .headers
            .insert("X-Bad".to_string(), "line\nbreak".to_string());
        let err = HttpComponent::new(config).unwrap_err();
        assert!(matches!(err, HttpComponentError::Build(_)));
    }

    #[tokio::test]
    async fn test_invalid_method() {
        let component = HttpComponent::new(ClientConfig::default()).unwrap();
        let err = component
            .request("BAD METHOD", "http://127.0.0.1:1/", None)
            .await
            .unwrap_err();
        assert!(matches!(err, HttpComponentError::InvalidMethod(_)));
    }

    #[tokio::test]
    async fn test_relative_url_is_rejected() {
        let component = HttpComponent::new(ClientConfig::default()).unwrap();
        let err = component
            .get(Target::segments(["users", "42"]), &Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, HttpComponentError::InvalidUrl { .. }));
    }
}
