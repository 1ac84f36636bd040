//! finscreen-core
//!
//! Core building blocks shared by the finscreen orchestrator, transports and
//! test doubles:
//!
//! - `HttpTransport`: the injected HTTP collaborator.
//! - `RawRecord` / `FieldValue` / `PageResult`: what one page scrape yields.
//! - `HeaderSet`: ordered, de-duplicated header bookkeeping.
//! - `Table` / `Record` and [`assemble`]: rectangular rendered output.
//! - [`column_type`]: header name to semantic `ColumnType`.
//! - `ScreenRequest` and the URL builders.
//!
//! All shared vocabulary from `finscreen-types` is re-exported here.
#![warn(missing_docs)]

pub mod classify;
mod record;
pub mod request;
mod table;
mod transport;

pub use classify::column_type;
pub use finscreen_types::*;
pub use record::{FieldValue, HeaderSet, Labeled, PageResult, RawRecord, TICKER_HEADER};
pub use request::{ScreenRequest, build_quote_url, build_screen_url};
pub use table::{Record, Table, assemble};
pub use transport::{HttpResponse, HttpTransport};
