//! Screener filters modeled as one tagged type plus a category lookup table.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::ScreenError;

/// Filter category. Each category contributes one `key_value` clause to the
/// `f=` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FilterCategory {
    /// Listing exchange (`exch`).
    Exchange,
    /// Index membership (`idx`).
    Index,
    /// Sector (`sec`).
    Sector,
    /// Industry (`ind`).
    Industry,
    /// Country of domicile (`geo`).
    Country,
    /// Market capitalization bucket (`cap`).
    MarketCap,
    /// Trailing P/E (`fa_pe`).
    PriceEarnings,
    /// Forward P/E (`fa_fpe`).
    ForwardPriceEarnings,
    /// PEG ratio (`fa_peg`).
    Peg,
    /// Price/Sales (`fa_ps`).
    PriceSales,
    /// Price/Book (`fa_pb`).
    PriceBook,
    /// Dividend yield (`fa_div`).
    DividendYield,
    /// Return on equity (`fa_roe`).
    ReturnOnEquity,
    /// Debt/Equity (`fa_debteq`).
    DebtEquity,
    /// Float short percentage (`sh_short`).
    FloatShort,
    /// Analyst recommendation (`an_recom`).
    AnalystRecommendation,
    /// Optionable/shortable flags (`sh_opt`).
    OptionShort,
    /// Earnings date window (`earningsdate`).
    EarningsDate,
    /// Average volume (`sh_avgvol`).
    AverageVolume,
    /// Relative volume (`sh_relvol`).
    RelativeVolume,
    /// Current volume (`sh_curvol`).
    CurrentVolume,
    /// Share price (`sh_price`).
    Price,
    /// Target price relative to price (`targetprice`).
    TargetPrice,
    /// IPO date window (`ipodate`).
    IpoDate,
    /// Performance over a period (`ta_perf`).
    Performance,
    /// Weekly/monthly volatility (`ta_volatility`).
    Volatility,
    /// RSI(14) level (`ta_rsi`).
    Rsi,
    /// Gap up/down (`ta_gap`).
    Gap,
    /// Price relative to the 20-day SMA (`ta_sma20`).
    Sma20,
    /// Price relative to the 50-day SMA (`ta_sma50`).
    Sma50,
    /// Price relative to the 200-day SMA (`ta_sma200`).
    Sma200,
    /// Chart pattern (`ta_pattern`).
    Pattern,
    /// Candlestick pattern (`ta_candlestick`).
    Candlestick,
    /// Beta (`ta_beta`).
    Beta,
}

/// One row of the category lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    /// Category this row describes.
    pub category: FilterCategory,
    /// Prefix used in the `f=` clause.
    pub key: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Whether the category accepts a `|`-joined disjunction of values.
    pub multi: bool,
}

const fn spec(category: FilterCategory, key: &'static str, name: &'static str, multi: bool) -> FilterSpec {
    FilterSpec {
        category,
        key,
        name,
        multi,
    }
}

/// Category lookup table.
pub const FILTER_SPECS: &[FilterSpec] = &[
    spec(FilterCategory::Exchange, "exch", "Exchange", true),
    spec(FilterCategory::Index, "idx", "Index", true),
    spec(FilterCategory::Sector, "sec", "Sector", true),
    spec(FilterCategory::Industry, "ind", "Industry", true),
    spec(FilterCategory::Country, "geo", "Country", true),
    spec(FilterCategory::MarketCap, "cap", "Market Cap.", true),
    spec(FilterCategory::PriceEarnings, "fa_pe", "P/E", false),
    spec(FilterCategory::ForwardPriceEarnings, "fa_fpe", "Forward P/E", false),
    spec(FilterCategory::Peg, "fa_peg", "PEG", false),
    spec(FilterCategory::PriceSales, "fa_ps", "P/S", false),
    spec(FilterCategory::PriceBook, "fa_pb", "P/B", false),
    spec(FilterCategory::DividendYield, "fa_div", "Dividend Yield", false),
    spec(FilterCategory::ReturnOnEquity, "fa_roe", "Return on Equity", false),
    spec(FilterCategory::DebtEquity, "fa_debteq", "Debt/Equity", false),
    spec(FilterCategory::FloatShort, "sh_short", "Float Short", false),
    spec(FilterCategory::AnalystRecommendation, "an_recom", "Analyst Recom.", false),
    spec(FilterCategory::OptionShort, "sh_opt", "Option/Short", true),
    spec(FilterCategory::EarningsDate, "earningsdate", "Earnings Date", false),
    spec(FilterCategory::AverageVolume, "sh_avgvol", "Average Volume", false),
    spec(FilterCategory::RelativeVolume, "sh_relvol", "Relative Volume", false),
    spec(FilterCategory::CurrentVolume, "sh_curvol", "Current Volume", false),
    spec(FilterCategory::Price, "sh_price", "Price", false),
    spec(FilterCategory::TargetPrice, "targetprice", "Target Price", false),
    spec(FilterCategory::IpoDate, "ipodate", "IPO Date", false),
    spec(FilterCategory::Performance, "ta_perf", "Performance", false),
    spec(FilterCategory::Volatility, "ta_volatility", "Volatility", false),
    spec(FilterCategory::Rsi, "ta_rsi", "RSI (14)", false),
    spec(FilterCategory::Gap, "ta_gap", "Gap", false),
    spec(FilterCategory::Sma20, "ta_sma20", "20-Day Simple Moving Average", false),
    spec(FilterCategory::Sma50, "ta_sma50", "50-Day Simple Moving Average", false),
    spec(FilterCategory::Sma200, "ta_sma200", "200-Day Simple Moving Average", false),
    spec(FilterCategory::Pattern, "ta_pattern", "Pattern", false),
    spec(FilterCategory::Candlestick, "ta_candlestick", "Candlestick", false),
    spec(FilterCategory::Beta, "ta_beta", "Beta", false),
];

impl FilterCategory {
    /// Lookup-table row for this category.
    #[must_use]
    pub const fn spec(self) -> &'static FilterSpec {
        // FILTER_SPECS is declared in enum order.
        &FILTER_SPECS[self as usize]
    }

    /// Prefix used in the `f=` clause.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.spec().key
    }

    /// Whether this category accepts several values joined with `|`.
    #[must_use]
    pub fn is_multi(self) -> bool {
        self.spec().multi
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

/// One validated filter clause: a category and one or more encoded values.
///
/// Values are the upstream encodings (e.g. `"large"` for `cap_large`,
/// `"nasd"` for `exch_nasd`). Several values form a disjunction and are only
/// accepted for multi-select categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFilter")]
pub struct Filter {
    category: FilterCategory,
    values: Vec<String>,
}

/// Unchecked wire form; deserialization goes through [`Filter::new`].
#[derive(Deserialize)]
struct RawFilter {
    category: FilterCategory,
    values: Vec<String>,
}

impl TryFrom<RawFilter> for Filter {
    type Error = ScreenError;

    fn try_from(raw: RawFilter) -> Result<Self, Self::Error> {
        Self::new(raw.category, raw.values)
    }
}

impl Filter {
    /// Build a filter, validating the value count against the category.
    ///
    /// # Errors
    /// - `EmptyFilter` when `values` is empty.
    /// - `InvalidArg` when a value is blank, or several values are given for a
    ///   single-select category.
    pub fn new<I, S>(category: FilterCategory, values: I) -> Result<Self, ScreenError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(|v| v.into().trim().to_string())
            .collect();
        if values.is_empty() {
            return Err(ScreenError::EmptyFilter {
                category: category.to_string(),
            });
        }
        if let Some(blank) = values.iter().position(String::is_empty) {
            return Err(ScreenError::InvalidArg(format!(
                "filter {category} has a blank value at position {blank}"
            )));
        }
        if values.len() > 1 && !category.is_multi() {
            return Err(ScreenError::InvalidArg(format!(
                "filter {category} accepts a single value, got {}",
                values.len()
            )));
        }
        Ok(Self { category, values })
    }

    /// Convenience for a single-value filter.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the value is blank.
    pub fn one(category: FilterCategory, value: impl Into<String>) -> Result<Self, ScreenError> {
        Self::new(category, [value.into()])
    }

    /// The filter category.
    #[must_use]
    pub const fn category(&self) -> FilterCategory {
        self.category
    }

    /// The encoded values.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Clause as it appears inside `f=`, e.g. `exch_nasd|nyse`.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}_{}", self.category.key(), self.values.join("|"))
    }
}
