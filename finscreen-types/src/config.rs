//! Configuration types shared by the orchestrator and transports.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default upstream host.
pub const DEFAULT_BASE_URL: &str = "https://finviz.com";

/// Body the upstream returns (with HTTP 200) when it soft rate-limits a client.
pub const RATE_LIMIT_SENTINEL: &str = "Too many requests.";

/// Exponential backoff configuration for page fetch retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Minimum backoff delay in milliseconds.
    pub min_backoff_ms: u64,
    /// Maximum backoff delay in milliseconds.
    pub max_backoff_ms: u64,
    /// Exponential factor to increase delay after each failure (>= 1).
    pub factor: u32,
    /// Random jitter percentage [0, 100] added to each delay.
    pub jitter_percent: u8,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            min_backoff_ms: 500,
            max_backoff_ms: 30_000,
            factor: 2,
            jitter_percent: 20,
        }
    }
}

impl BackoffConfig {
    /// Base (pre-jitter) delay before retry number `retry` (0-based).
    ///
    /// Grows as `min * factor^retry`, saturating, and is capped at `max`.
    #[must_use]
    pub fn base_delay_ms(&self, retry: u32) -> u64 {
        let factor = u64::from(self.factor.max(1));
        let mut delay = self.min_backoff_ms;
        for _ in 0..retry {
            delay = delay.saturating_mul(factor);
            if delay >= self.max_backoff_ms {
                break;
            }
        }
        delay.min(self.max_backoff_ms)
    }
}

/// Retry budget for a single page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts including the first one. `1` disables retries.
    pub max_attempts: u32,
    /// Delay schedule between attempts.
    pub backoff: BackoffConfig,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff: BackoffConfig::default(),
        }
    }
}

/// Global configuration for the `Screener` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Scheme and host of the upstream report, without a trailing path.
    pub base_url: String,
    /// Per-request retry policy applied by the page fetcher.
    pub retry: RetryConfig,
    /// Upper bound on concurrently fetched pages after page 1.
    pub max_concurrent_pages: usize,
    /// Optional overall deadline for one `screen`/`quote` call.
    /// `None` leaves timing entirely to the transport.
    pub request_timeout: Option<Duration>,
    /// Response bodies treated as a soft rate-limit signal even on HTTP 200.
    /// Compared for exact equality.
    pub rate_limit_sentinels: Vec<String>,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryConfig::default(),
            max_concurrent_pages: 8,
            request_timeout: None,
            rate_limit_sentinels: vec![RATE_LIMIT_SENTINEL.to_string()],
        }
    }
}
