//! Column semantics: the custom-column catalog and semantic column types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type of a table column, for downstream typed consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Plain integer, possibly with thousands separators (`1,234,567`).
    Integer,
    /// Float with an optional magnitude suffix (`2.41T`, `135.2M`, `880K`).
    LargeInteger,
    /// Plain decimal number.
    Float,
    /// Decimal number, usually followed by `%`.
    Percentage,
    /// Free text.
    String,
}

/// Placeholder rendered for absent values.
pub const PLACEHOLDER: &str = "-";

fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned.trim().parse::<f64>().ok()
}

impl ColumnType {
    /// Whether `value` parses as this type. The placeholder is always accepted.
    ///
    /// This is a validation helper only; values are never coerced.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        let v = value.trim();
        if v == PLACEHOLDER {
            return true;
        }
        match self {
            Self::String => true,
            Self::Integer => {
                let cleaned: String = v.chars().filter(|c| *c != ',').collect();
                cleaned.parse::<i64>().is_ok()
            }
            Self::LargeInteger => {
                let digits = v.strip_suffix(['K', 'M', 'B', 'T']).unwrap_or(v);
                parse_number(digits).is_some()
            }
            Self::Float => parse_number(v).is_some(),
            Self::Percentage => parse_number(v.strip_suffix('%').unwrap_or(v)).is_some(),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::LargeInteger => "large-integer",
            Self::Float => "float",
            Self::Percentage => "percentage",
            Self::String => "string",
        })
    }
}

/// Custom-view column catalog; the index is the upstream column id.
pub const CUSTOM_COLUMNS: &[&str] = &[
    "No.",
    "Ticker",
    "Company",
    "Sector",
    "Industry",
    "Country",
    "Market Cap",
    "P/E",
    "Forward P/E",
    "PEG",
    "P/S",
    "P/B",
    "P/C",
    "P/FCF",
    "Dividend",
    "Payout Ratio",
    "EPS",
    "EPS this Y",
    "EPS next Y",
    "EPS past 5Y",
    "EPS next 5Y",
    "Sales past 5Y",
    "EPS Q/Q",
    "Sales Q/Q",
    "Outstanding",
    "Float",
    "Insider Own",
    "Insider Trans",
    "Inst Own",
    "Inst Trans",
    "Float Short",
    "Short Ratio",
    "ROA",
    "ROE",
    "ROI",
    "Curr R",
    "Quick R",
    "LTDebt/Eq",
    "Debt/Eq",
    "Gross M",
    "Oper M",
    "Profit M",
    "Perf Week",
    "Perf Month",
    "Perf Quart",
    "Perf Half",
    "Perf Year",
    "Perf YTD",
    "Beta",
    "ATR",
    "Volatility W",
    "Volatility M",
    "SMA20",
    "SMA50",
    "SMA200",
    "50D High",
    "50D Low",
    "52W High",
    "52W Low",
    "RSI",
    "from Open",
    "Gap",
    "Recom",
    "Avg Volume",
    "Rel Volume",
    "Price",
    "Change",
    "Volume",
    "Earnings",
    "Target Price",
    "IPO Date",
];

/// Column ids used by the Custom view when the caller selects none.
pub const DEFAULT_CUSTOM_COLUMNS: &[usize] = &[0, 1, 2, 3, 4, 5, 6, 7, 65, 66, 67];

/// Catalog name for a custom column id.
#[must_use]
pub fn custom_column_name(id: usize) -> Option<&'static str> {
    CUSTOM_COLUMNS.get(id).copied()
}
