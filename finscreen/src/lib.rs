//! finscreen turns a paginated HTML stock screener into one typed table.
//!
//! Overview
//! - Builds screener URLs from a typed `ScreenRequest` (view, signal, filters,
//!   tickers, sort, chart and custom-column extras).
//! - Fetches page 1, then the remaining pages concurrently with bounded
//!   parallelism, retrying each page with exponential backoff and jitter.
//! - Scrapes every view layout (fixed columns, composite snapshot blocks,
//!   chart tooltips, column-major bulk grids) into raw records.
//! - Merges pages in order into a rectangular `Table` whose columns can be
//!   classified into semantic `ColumnType`s.
//!
//! Key behaviors and trade-offs
//! - All-or-nothing aggregation: one failing page aborts the screen with
//!   `ScreenError::Page`; partial tables are never returned.
//! - Soft rate limits (a 200 response whose body is a sentinel string) are
//!   detected and retried like transport failures.
//! - Cells keep the upstream text verbatim; absent values become `"-"` and
//!   satellite lists become JSON arrays. Typing is left to the caller.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use finscreen::{Filter, FilterCategory, ScreenRequest, Screener, Sort, ViewVariant};
//! use finscreen_http::ReqwestTransport;
//!
//! let screener = Screener::builder()
//!     .with_transport(Arc::new(ReqwestTransport::new_default()?))
//!     .build()?;
//!
//! let req = ScreenRequest::new(ViewVariant::Overview)
//!     .filter(Filter::one(FilterCategory::MarketCap, "mega")?)
//!     .sort(Sort::descending("Market Cap"));
//! let table = screener.screen(&req).await?;
//! for row in table.rows() {
//!     println!("{}", row.join("\t"));
//! }
//!
//! let apple = screener.quote("AAPL").await?;
//! println!("{:?}", apple.get("P/E"));
//! ```
//!
//! See `finscreen/examples/` for runnable demonstrations against the mock transport.
#![warn(missing_docs)]

pub(crate) mod core;
mod engine;
pub mod scrape;

pub use core::{Screener, ScreenerBuilder};
pub use engine::backoff::jitter_wait;
pub use engine::util::with_request_deadline;

// Re-export core types for convenience
pub use finscreen_core::{
    BackoffConfig,
    ChartStyle,
    ColumnType,
    DEFAULT_BASE_URL,
    FieldValue,
    Filter,
    FilterCategory,
    HttpResponse,
    HttpTransport,
    Labeled,
    PLACEHOLDER,
    PageResult,
    RATE_LIMIT_SENTINEL,
    RawRecord,
    Record,
    RetryConfig,
    Satellite,
    ScreenError,
    ScreenRequest,
    ScreenerConfig,
    Signal,
    Sort,
    SortOrder,
    Table,
    Timeframe,
    ViewLayout,
    ViewVariant,
    build_quote_url,
    build_screen_url,
    column_type,
};
