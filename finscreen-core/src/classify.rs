//! Static header-name to column-type lookup.
//!
//! Covers every header any scraper can emit: fixed-view columns, the custom
//! column catalog, composite title and snapshot labels, tooltip fields, bulk
//! extras, and satellite headers. Lookup is case-insensitive.

use crate::{ColumnType, ScreenError};

/// Semantic type for `header`.
///
/// # Errors
/// Returns `ScreenError::UnknownColumn` when the header is not in the table.
pub fn column_type(header: &str) -> Result<ColumnType, ScreenError> {
    lookup(header).ok_or_else(|| ScreenError::UnknownColumn {
        header: header.to_string(),
    })
}

/// Like [`column_type`] but returns `None` for unknown headers.
#[must_use]
pub fn lookup(header: &str) -> Option<ColumnType> {
    let key = header.trim().to_lowercase();
    let ty = match key.as_str() {
        "ticker" | "company" | "sector" | "industry" | "country" | "earnings" | "ipo date"
        | "index" | "52w range" | "volatility" | "optionable" | "shortable" | "news"
        | "description" | "insider trading" | "ratings" => ColumnType::String,

        "no." | "volume" | "employees" => ColumnType::Integer,

        "market cap" | "outstanding" | "float" | "avg volume" | "shs outstand" | "shs float"
        | "income" | "sales" => ColumnType::LargeInteger,

        "p/e" | "fwd p/e" | "forward p/e" | "peg" | "p/s" | "p/b" | "p/c" | "p/fcf" | "eps"
        | "eps (ttm)" | "eps next q" | "short ratio" | "recom" | "rel volume" | "curr r"
        | "quick r" | "current ratio" | "quick ratio" | "ltdebt/eq" | "lt debt/eq"
        | "debt/eq" | "beta" | "atr" | "rsi" | "rsi (14)" | "price" | "prev close"
        | "target price" | "book/sh" | "cash/sh" => ColumnType::Float,

        "change" | "eps this y" | "eps next y" | "eps past 5y" | "eps next 5y"
        | "sales past 5y" | "eps q/q" | "sales q/q" | "insider own" | "insider trans"
        | "inst own" | "inst trans" | "float short" | "short float" | "perf week"
        | "perf month" | "perf quart" | "perf quarter" | "perf half" | "perf half y"
        | "perf year" | "perf ytd" | "volatility w" | "volatility m" | "dividend"
        | "dividend %" | "payout" | "payout ratio" | "roa" | "roe" | "roi" | "gross m"
        | "oper m" | "profit m" | "gross margin" | "oper. margin" | "profit margin"
        | "sma20" | "sma50" | "sma200" | "50d high" | "50d low" | "52w high" | "52w low"
        | "from open" | "gap" => ColumnType::Percentage,

        "eps next y (2)" => ColumnType::Percentage,

        _ => return repeated_label_base(&key).and_then(lookup),
    };
    Some(ty)
}

/// `"label (n)"` as emitted for a repeated snapshot label, back to `"label"`.
fn repeated_label_base(key: &str) -> Option<&str> {
    let (base, n) = key.strip_suffix(')')?.rsplit_once(" (")?;
    (!n.is_empty() && n.bytes().all(|b| b.is_ascii_digit())).then_some(base)
}
