//! Shared finscreen error, configuration, and screener vocabulary types.
//!
//! Everything here is plain data: enums with their upstream codes, lookup
//! tables, and validation that can run before any network I/O.
#![warn(missing_docs)]

mod chart;
mod columns;
mod config;
mod error;
mod filter;
mod signal;
mod sort;
mod view;

pub use chart::{ChartStyle, Timeframe};
pub use columns::{
    CUSTOM_COLUMNS, ColumnType, DEFAULT_CUSTOM_COLUMNS, PLACEHOLDER, custom_column_name,
};
pub use config::{
    BackoffConfig, DEFAULT_BASE_URL, RATE_LIMIT_SENTINEL, RetryConfig, ScreenerConfig,
};
pub use error::{MAX_ERROR_BODY_CHARS, ScreenError};
pub use filter::{FILTER_SPECS, Filter, FilterCategory, FilterSpec};
pub use signal::Signal;
pub use sort::{SORT_FIELDS, Sort, SortOrder, sort_field_code};
pub use view::{Satellite, TOOLTIP_HEADERS, ViewLayout, ViewVariant};
