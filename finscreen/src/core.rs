use std::sync::Arc;
use std::time::Duration;

use finscreen_core::{BackoffConfig, HttpTransport, RetryConfig, ScreenError, ScreenerConfig};

/// Orchestrator that fetches, scrapes and merges screener pages.
pub struct Screener {
    pub(crate) transport: Arc<dyn HttpTransport>,
    pub(crate) cfg: ScreenerConfig,
}

/// Builder for constructing a `Screener` with custom configuration.
pub struct ScreenerBuilder {
    transport: Option<Arc<dyn HttpTransport>>,
    cfg: ScreenerConfig,
}

impl Default for ScreenerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenerBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no transport; you must register one via [`Self::with_transport`].
    /// - Defaults: upstream base URL, 5 attempts per page with 500ms..30s
    ///   exponential backoff and 20% jitter, 8 pages in flight, no overall
    ///   deadline, and the upstream's `"Too many requests."` sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transport: None,
            cfg: ScreenerConfig::default(),
        }
    }

    /// Register the HTTP transport. A later call replaces an earlier one.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: ScreenerConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Point requests at another host (a mirror, or a local test server).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.cfg.base_url = base_url.into();
        self
    }

    /// Set the per-page retry policy.
    #[must_use]
    pub const fn retry(mut self, retry: RetryConfig) -> Self {
        self.cfg.retry = retry;
        self
    }

    /// Set the total number of attempts per page (first try included).
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.cfg.retry.max_attempts = attempts;
        self
    }

    /// Set the backoff between attempts.
    ///
    /// Behavior and trade-offs:
    /// - Higher jitter spreads out retries from concurrent pages at the cost of
    ///   less predictable latency.
    #[must_use]
    pub const fn backoff(mut self, backoff: BackoffConfig) -> Self {
        self.cfg.retry.backoff = backoff;
        self
    }

    /// Bound how many pages are fetched at once.
    ///
    /// Behavior and trade-offs:
    /// - Higher values finish large screens faster but make upstream rate
    ///   limiting (and therefore retries) more likely.
    #[must_use]
    pub const fn max_concurrent_pages(mut self, n: usize) -> Self {
        self.cfg.max_concurrent_pages = n;
        self
    }

    /// Set an overall deadline for one `screen` or `quote` call.
    ///
    /// When exceeded, in-flight pages are dropped and `RequestTimeout` is returned.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Add a body that signals a soft rate limit on an otherwise successful response.
    #[must_use]
    pub fn rate_limit_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.cfg.rate_limit_sentinels.push(sentinel.into());
        self
    }

    /// Build the `Screener`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no transport was registered, or if
    /// `max_concurrent_pages` or `max_attempts` is zero.
    pub fn build(self) -> Result<Screener, ScreenError> {
        let Some(transport) = self.transport else {
            return Err(ScreenError::InvalidArg(
                "no transport registered; add one via with_transport(...)".to_string(),
            ));
        };
        if self.cfg.max_concurrent_pages == 0 {
            return Err(ScreenError::InvalidArg(
                "max_concurrent_pages must be at least 1".to_string(),
            ));
        }
        if self.cfg.retry.max_attempts == 0 {
            return Err(ScreenError::InvalidArg(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(Screener {
            transport,
            cfg: self.cfg,
        })
    }
}

impl Screener {
    /// Start building a new `Screener`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use finscreen::Screener;
    /// use finscreen_http::ReqwestTransport;
    ///
    /// let screener = Screener::builder()
    ///     .with_transport(Arc::new(ReqwestTransport::new_default()?))
    ///     .max_concurrent_pages(4)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> ScreenerBuilder {
        ScreenerBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &ScreenerConfig {
        &self.cfg
    }

    /// Name of the registered transport.
    #[must_use]
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }
}
