//! Screener view variants and their layout families.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ScreenError;

/// A named layout/column-set mode the upstream report can render in.
///
/// The variant decides which document regions are scraped and which header
/// set is expected. It is chosen once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ViewVariant {
    /// Company, sector, industry, country, cap, P/E, price.
    Overview,
    /// Valuation multiples and growth.
    Valuation,
    /// Share structure, insider and institutional ownership.
    Ownership,
    /// Period returns and volatility.
    Performance,
    /// Caller-selected columns.
    Custom,
    /// Margins, returns and leverage ratios.
    Financial,
    /// Moving averages, RSI, ranges.
    Technical,
    /// Chart thumbnails with a tooltip per ticker.
    Charts,
    /// Snapshot table plus news, description and insider trading.
    Basic,
    /// Snapshot table plus news.
    News,
    /// Snapshot table plus company description.
    Description,
    /// Snapshot table plus every satellite block.
    Snapshot,
    /// Snapshot table plus analyst ratings.
    #[serde(rename = "TA")]
    Ta,
    /// Plain ticker list with tooltips.
    Tickers,
    /// Column-major ticker grid.
    Bulk,
    /// Column-major ticker grid with price and change.
    BulkFull,
}

/// How a view lays out rows in the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewLayout {
    /// One table row per ticker, static columns read positionally.
    Fixed,
    /// One primary snapshot block per ticker followed by optional satellite blocks.
    Composite,
    /// Chart thumbnails carrying a packed tooltip.
    Chart,
    /// Row-major ticker list carrying a packed tooltip.
    Tickers,
    /// Column-major grid of tooltip entries that must be transposed.
    Bulk,
}

/// Optional sub-section of a composite row carrying nested data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Satellite {
    /// Analyst upgrades/downgrades table.
    Ratings,
    /// News headlines table.
    News,
    /// Free-text company description.
    Description,
    /// Insider trading table.
    InsiderTrading,
}

impl Satellite {
    /// Every satellite, in the order blocks appear on a quote page.
    pub const ALL: [Self; 4] = [
        Self::Ratings,
        Self::News,
        Self::Description,
        Self::InsiderTrading,
    ];

    /// Reserved header name the satellite's content is stored under.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Ratings => "Ratings",
            Self::News => "News",
            Self::Description => "Description",
            Self::InsiderTrading => "Insider Trading",
        }
    }
}

impl ViewVariant {
    /// Every variant, in upstream code order.
    pub const ALL: [Self; 16] = [
        Self::Overview,
        Self::Valuation,
        Self::Ownership,
        Self::Performance,
        Self::Custom,
        Self::Financial,
        Self::Technical,
        Self::Charts,
        Self::Basic,
        Self::News,
        Self::Description,
        Self::Snapshot,
        Self::Ta,
        Self::Tickers,
        Self::Bulk,
        Self::BulkFull,
    ];

    /// Upstream `v=` code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Overview => "111",
            Self::Valuation => "121",
            Self::Ownership => "131",
            Self::Performance => "141",
            Self::Custom => "152",
            Self::Financial => "161",
            Self::Technical => "171",
            Self::Charts => "211",
            Self::Basic => "311",
            Self::News => "321",
            Self::Description => "331",
            Self::Snapshot => "341",
            Self::Ta => "351",
            Self::Tickers => "411",
            Self::Bulk => "511",
            Self::BulkFull => "521",
        }
    }

    /// Stable lower-case name used by `Display`/`FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Valuation => "valuation",
            Self::Ownership => "ownership",
            Self::Performance => "performance",
            Self::Custom => "custom",
            Self::Financial => "financial",
            Self::Technical => "technical",
            Self::Charts => "charts",
            Self::Basic => "basic",
            Self::News => "news",
            Self::Description => "description",
            Self::Snapshot => "snapshot",
            Self::Ta => "ta",
            Self::Tickers => "tickers",
            Self::Bulk => "bulk",
            Self::BulkFull => "bulkfull",
        }
    }

    /// Layout family used to pick a scraper.
    #[must_use]
    pub const fn layout(self) -> ViewLayout {
        match self {
            Self::Overview
            | Self::Valuation
            | Self::Ownership
            | Self::Performance
            | Self::Custom
            | Self::Financial
            | Self::Technical => ViewLayout::Fixed,
            Self::Basic | Self::News | Self::Description | Self::Snapshot | Self::Ta => {
                ViewLayout::Composite
            }
            Self::Charts => ViewLayout::Chart,
            Self::Tickers => ViewLayout::Tickers,
            Self::Bulk | Self::BulkFull => ViewLayout::Bulk,
        }
    }

    /// Satellite blocks scraped for composite variants; empty otherwise.
    #[must_use]
    pub const fn satellites(self) -> &'static [Satellite] {
        match self {
            Self::Basic => &[
                Satellite::News,
                Satellite::Description,
                Satellite::InsiderTrading,
            ],
            Self::News => &[Satellite::News],
            Self::Description => &[Satellite::Description],
            Self::Snapshot => &Satellite::ALL,
            Self::Ta => &[Satellite::Ratings],
            _ => &[],
        }
    }

    /// Static header list for variants whose columns do not depend on
    /// page content or caller selection.
    ///
    /// Returns `None` for `Custom` (headers come from the column selection)
    /// and for composite variants (headers are discovered from content).
    #[must_use]
    pub const fn static_headers(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Overview => Some(&[
                "No.",
                "Ticker",
                "Company",
                "Sector",
                "Industry",
                "Country",
                "Market Cap",
                "P/E",
                "Price",
                "Change",
                "Volume",
            ]),
            Self::Valuation => Some(&[
                "No.",
                "Ticker",
                "Market Cap",
                "P/E",
                "Fwd P/E",
                "PEG",
                "P/S",
                "P/B",
                "P/C",
                "P/FCF",
                "EPS this Y",
                "EPS next Y",
                "EPS past 5Y",
                "EPS next 5Y",
                "Sales past 5Y",
                "Price",
                "Change",
                "Volume",
            ]),
            Self::Ownership => Some(&[
                "No.",
                "Ticker",
                "Market Cap",
                "Outstanding",
                "Float",
                "Insider Own",
                "Insider Trans",
                "Inst Own",
                "Inst Trans",
                "Float Short",
                "Short Ratio",
                "Avg Volume",
                "Price",
                "Change",
                "Volume",
            ]),
            Self::Performance => Some(&[
                "No.",
                "Ticker",
                "Perf Week",
                "Perf Month",
                "Perf Quart",
                "Perf Half",
                "Perf Year",
                "Perf YTD",
                "Volatility W",
                "Volatility M",
                "Recom",
                "Avg Volume",
                "Rel Volume",
                "Price",
                "Change",
                "Volume",
            ]),
            Self::Financial => Some(&[
                "No.",
                "Ticker",
                "Market Cap",
                "Dividend",
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
                "Earnings",
                "Price",
                "Change",
                "Volume",
            ]),
            Self::Technical => Some(&[
                "No.",
                "Ticker",
                "Beta",
                "ATR",
                "SMA20",
                "SMA50",
                "SMA200",
                "52W High",
                "52W Low",
                "RSI",
                "Price",
                "Change",
                "from Open",
                "Gap",
                "Volume",
            ]),
            Self::Charts | Self::Tickers | Self::Bulk => Some(TOOLTIP_HEADERS),
            Self::BulkFull => Some(&[
                "Ticker",
                "Company",
                "Industry",
                "Country",
                "Market Cap",
                "Price",
                "Change",
            ]),
            _ => None,
        }
    }
}

/// Headers produced by the packed tooltip grammar.
pub const TOOLTIP_HEADERS: &[&str] = &["Ticker", "Company", "Industry", "Country", "Market Cap"];

impl fmt::Display for ViewVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewVariant {
    type Err = ScreenError;

    /// Accepts the lower-case name (`"overview"`), the upstream code (`"111"`),
    /// or the name in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(needle) || v.code() == needle)
            .ok_or_else(|| ScreenError::UnknownView {
                view: s.to_string(),
            })
    }
}
