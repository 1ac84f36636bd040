//! finscreen-http
//!
//! Production `HttpTransport` on top of `reqwest`. The transport only moves
//! bytes: status classification, rate-limit detection and retries live in the
//! `finscreen` orchestrator.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use finscreen_core::{HttpResponse, HttpTransport, ScreenError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Browser-like user agent; the upstream rejects obvious bot agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Public transport type. Production users will construct with
/// `ReqwestTransport::new_default()`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build with a fresh client using the default user agent and timeout.
    ///
    /// # Errors
    /// Returns `Transport` if the TLS backend cannot be initialized.
    pub fn new_default() -> Result<Self, ScreenError> {
        Self::builder().build()
    }

    /// Start a builder for a customized client.
    #[must_use]
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Wrap an existing `reqwest::Client` as-is.
    ///
    /// The client's own user agent, timeouts and headers are used unchanged.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn map_err(url: &str, e: &reqwest::Error) -> ScreenError {
        if e.is_builder() {
            return ScreenError::invalid_url(url, e.to_string());
        }
        let kind = if e.is_timeout() {
            "timed out"
        } else if e.is_connect() {
            "connect failed"
        } else if e.is_body() || e.is_decode() {
            "body read failed"
        } else {
            "request failed"
        };
        ScreenError::transport(url, format!("{kind}: {e}"))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    fn name(&self) -> &'static str {
        "finscreen-http"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "finscreen_http::get", skip(self), err)
    )]
    async fn get(&self, url: &str) -> Result<HttpResponse, ScreenError> {
        let parsed =
            url::Url::parse(url).map_err(|e| ScreenError::invalid_url(url, e.to_string()))?;
        let resp = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Self::map_err(url, &e))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| Self::map_err(url, &e))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(status, bytes = body.len(), "response received");
        Ok(HttpResponse::with_status(status, body))
    }
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug, Clone)]
pub struct ReqwestTransportBuilder {
    user_agent: String,
    timeout: Duration,
    headers: Vec<(String, String)>,
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            headers: Vec::new(),
        }
    }
}

impl ReqwestTransportBuilder {
    /// Override the user agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Per-request timeout (connect plus body).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a header name or value that is not valid HTTP,
    /// and `Transport` if the client cannot be constructed.
    pub fn build(self) -> Result<ReqwestTransport, ScreenError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ScreenError::InvalidArg(format!("header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ScreenError::InvalidArg(format!("header value for {name}: {e}")))?;
            headers.insert(name, value);
        }
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ScreenError::transport("", format!("client build failed: {e}")))?;
        Ok(ReqwestTransport::with_client(client))
    }
}
