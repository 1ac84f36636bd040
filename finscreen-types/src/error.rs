use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the finscreen workspace.
///
/// Variants are grouped by the stage that raises them: request construction
/// (before any I/O), page fetching (transient or permanent), scraping, and
/// multi-page aggregation.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScreenError {
    /// A view name did not match any known view variant.
    #[error("unknown view: {view}")]
    UnknownView {
        /// The offending view name as supplied by the caller.
        view: String,
    },

    /// A sort field name is not present in the sort-field lookup.
    #[error("unknown sort field: {field}")]
    UnknownSortField {
        /// The offending field name as supplied by the caller.
        field: String,
    },

    /// The chart style cannot be rendered with the requested timeframe.
    #[error("chart style {style} is not available for the {timeframe} timeframe")]
    InvalidChartStyle {
        /// Chart style label.
        style: String,
        /// Timeframe label.
        timeframe: String,
    },

    /// A filter category was supplied without any value.
    #[error("filter {category} requires at least one value")]
    EmptyFilter {
        /// Filter category label.
        category: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The request URL is malformed. Never retried.
    #[error("invalid url {url}: {msg}")]
    InvalidUrl {
        /// URL (or base URL) that failed to parse.
        url: String,
        /// Parser message.
        msg: String,
    },

    /// Network-level failure talking to the upstream (connect, TLS, read, timeout).
    #[error("transport error for {url}: {msg}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Upstream answered with a non-200 status.
    #[error("unexpected status {status} for {url}: {body}")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// Upstream answered 200 with its soft rate-limit sentinel body.
    #[error("rate limited by upstream for {url}")]
    RateLimited {
        /// Requested URL.
        url: String,
    },

    /// Issues with the scraped document (missing regions, malformed tooltip, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// A scraped field value has a shape the table assembler cannot render.
    #[error("unexpected value shape for {ticker}/{header}: {found}")]
    UnexpectedShape {
        /// Primary key (ticker) of the offending record.
        ticker: String,
        /// Header of the offending field.
        header: String,
        /// Short description of what was found.
        found: String,
    },

    /// One page of a multi-page aggregation failed; the whole screen is aborted.
    #[error("page {page} failed: {source}")]
    Page {
        /// 1-based page number.
        page: usize,
        /// Underlying failure.
        source: Box<ScreenError>,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {operation}")]
    RequestTimeout {
        /// Operation label (e.g. "screen", "quote").
        operation: String,
    },

    /// A header name is not present in the column type lookup.
    #[error("unknown column: {header}")]
    UnknownColumn {
        /// Header that failed to classify.
        header: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

/// Maximum number of body characters kept in [`ScreenError::HttpStatus`].
pub const MAX_ERROR_BODY_CHARS: usize = 256;

impl ScreenError {
    /// Helper: build a `Data` error.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build a `Transport` error.
    pub fn transport(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidUrl` error.
    pub fn invalid_url(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `HttpStatus` error, truncating the body to
    /// [`MAX_ERROR_BODY_CHARS`] characters.
    pub fn http_status(url: impl Into<String>, status: u16, body: &str) -> Self {
        let mut truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        if body.chars().count() > MAX_ERROR_BODY_CHARS {
            truncated.push_str("...");
        }
        Self::HttpStatus {
            url: url.into(),
            status,
            body: truncated,
        }
    }

    /// Helper: wrap an error with the 1-based page number it came from.
    #[must_use]
    pub fn on_page(self, page: usize) -> Self {
        Self::Page {
            page,
            source: Box::new(self),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    pub fn request_timeout(operation: impl Into<String>) -> Self {
        Self::RequestTimeout {
            operation: operation.into(),
        }
    }

    /// Returns true for failures the page fetcher should retry.
    ///
    /// Transport failures, non-200 statuses and the soft rate-limit sentinel
    /// are transient; everything else (including `InvalidUrl`) is permanent.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::HttpStatus { .. } | Self::RateLimited { .. }
        )
    }

    /// Returns true when the error was raised while building the request,
    /// before any network I/O happened.
    #[must_use]
    pub const fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownView { .. }
                | Self::UnknownSortField { .. }
                | Self::InvalidChartStyle { .. }
                | Self::EmptyFilter { .. }
                | Self::InvalidArg(_)
                | Self::InvalidUrl { .. }
        )
    }

    /// Strip any `Page` wrappers and return the innermost failure.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Page { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
