use async_trait::async_trait;

use crate::ScreenError;

/// Raw HTTP response as seen by the page fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl HttpResponse {
    /// A 200 response with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// A response with an arbitrary status.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// HTTP collaborator injected into the orchestrator.
///
/// Implementations own TLS, timeouts, user agent and header policy. They must
/// not retry on their own; classification and retries happen in the page
/// fetcher.
///
/// Error contract:
/// - `ScreenError::InvalidUrl` for requests that can never succeed (malformed URL).
/// - `ScreenError::Transport` for everything network-related (connect, TLS, read,
///   timeout).
/// - Non-200 statuses are returned as `Ok(HttpResponse)`, not as errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Short, stable name for logs and errors.
    fn name(&self) -> &'static str;

    /// Perform a GET request.
    async fn get(&self, url: &str) -> Result<HttpResponse, ScreenError>;
}
