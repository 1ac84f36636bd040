//! Sort specification and the sort-field lookup table.

use serde::{Deserialize, Serialize};

use crate::ScreenError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first; encoded with a leading `-`.
    Descending,
}

/// Display name → upstream `o=` code.
pub const SORT_FIELDS: &[(&str, &str)] = &[
    ("Ticker", "ticker"),
    ("Company", "company"),
    ("Sector", "sector"),
    ("Industry", "industry"),
    ("Country", "country"),
    ("Market Cap", "marketcap"),
    ("P/E", "pe"),
    ("Forward P/E", "forwardpe"),
    ("PEG", "peg"),
    ("P/S", "ps"),
    ("P/B", "pb"),
    ("P/C", "pc"),
    ("P/FCF", "pfcf"),
    ("Dividend Yield", "dividendyield"),
    ("Payout Ratio", "payoutratio"),
    ("EPS", "eps"),
    ("EPS this Y", "epsyoy"),
    ("EPS next Y", "epsyoy1"),
    ("EPS past 5Y", "eps5years"),
    ("EPS next 5Y", "estltgrowth"),
    ("Sales past 5Y", "sales5years"),
    ("EPS Q/Q", "epsqoq"),
    ("Sales Q/Q", "salesqoq"),
    ("Shares Outstanding", "sharesoutstanding2"),
    ("Shares Float", "sharesfloat"),
    ("Insider Ownership", "insiderown"),
    ("Insider Transactions", "insidertrans"),
    ("Institutional Ownership", "instown"),
    ("Institutional Transactions", "insttrans"),
    ("Float Short", "shortinterestshare"),
    ("Short Ratio", "shortinterestratio"),
    ("ROA", "roa"),
    ("ROE", "roe"),
    ("ROI", "roi"),
    ("Current Ratio", "curratio"),
    ("Quick Ratio", "quickratio"),
    ("LT Debt/Equity", "ltdebteq"),
    ("Debt/Equity", "debteq"),
    ("Gross Margin", "grossmargin"),
    ("Operating Margin", "opermargin"),
    ("Net Profit Margin", "netmargin"),
    ("Perf Week", "perf1w"),
    ("Perf Month", "perf4w"),
    ("Perf Quarter", "perf13w"),
    ("Perf Half", "perf26w"),
    ("Perf Year", "perf52w"),
    ("Perf YTD", "perfytd"),
    ("Beta", "beta"),
    ("ATR", "averagetruerange"),
    ("Volatility Week", "volatility1w"),
    ("Volatility Month", "volatility4w"),
    ("SMA20", "sma20"),
    ("SMA50", "sma50"),
    ("SMA200", "sma200"),
    ("52W High", "high52w"),
    ("52W Low", "low52w"),
    ("RSI", "rsi"),
    ("Change", "change"),
    ("Change from Open", "changeopen"),
    ("Gap", "gap"),
    ("Recom", "recom"),
    ("Average Volume", "averagevolume"),
    ("Relative Volume", "relativevolume"),
    ("Price", "price"),
    ("Volume", "volume"),
    ("Earnings Date", "earningsdate"),
    ("Target Price", "targetprice"),
    ("IPO Date", "ipodate"),
];

/// Look up the `o=` code for a sort field display name (case-insensitive).
#[must_use]
pub fn sort_field_code(field: &str) -> Option<&'static str> {
    let needle = field.trim();
    SORT_FIELDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(needle))
        .map(|(_, code)| *code)
}

/// A sort specification: field display name plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    /// Field display name, e.g. `"Market Cap"`.
    pub field: String,
    /// Direction.
    pub order: SortOrder,
}

impl Sort {
    /// Ascending sort on `field`.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Ascending,
        }
    }

    /// Descending sort on `field`.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Descending,
        }
    }

    /// Encoded `o=` value, e.g. `-marketcap`.
    ///
    /// # Errors
    /// Returns `UnknownSortField` when the field is not in [`SORT_FIELDS`].
    pub fn encode(&self) -> Result<String, ScreenError> {
        let code = sort_field_code(&self.field).ok_or_else(|| ScreenError::UnknownSortField {
            field: self.field.clone(),
        })?;
        Ok(match self.order {
            SortOrder::Ascending => code.to_string(),
            SortOrder::Descending => format!("-{code}"),
        })
    }
}
