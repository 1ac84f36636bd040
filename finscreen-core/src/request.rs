//! Screener request description and URL construction.
//!
//! Everything here is pure: the same request, base URL and offset always
//! yield the same URL, and every validation error is raised before any I/O.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    ChartStyle, DEFAULT_CUSTOM_COLUMNS, Filter, ScreenError, Signal, Sort, Timeframe, ViewLayout,
    ViewVariant, custom_column_name,
};

/// Path of the paginated screener report.
pub const SCREENER_PATH: &str = "/screener.ashx";
/// Path of the single-ticker quote page.
pub const QUOTE_PATH: &str = "/quote.ashx";

/// Everything that selects one screener result set.
///
/// Build with [`ScreenRequest::new`] and the chained modifiers:
///
/// ```
/// use finscreen_core::{Filter, FilterCategory, ScreenRequest, Sort, ViewVariant};
///
/// # fn main() -> Result<(), finscreen_core::ScreenError> {
/// let req = ScreenRequest::new(ViewVariant::Overview)
///     .filter(Filter::one(FilterCategory::MarketCap, "large")?)
///     .sort(Sort::descending("Market Cap"));
/// assert_eq!(req.view, ViewVariant::Overview);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRequest {
    /// View variant deciding layout and columns.
    pub view: ViewVariant,
    /// Optional predefined screen.
    pub signal: Option<Signal>,
    /// Filter clauses, combined by conjunction.
    pub filters: Vec<Filter>,
    /// Explicit ticker allowlist; empty means "no restriction".
    pub tickers: Vec<String>,
    /// Optional sort.
    pub sort: Option<Sort>,
    /// Chart style, used by the Charts view only.
    pub chart_style: ChartStyle,
    /// Chart timeframe, used by the Charts view only.
    pub timeframe: Timeframe,
    /// Custom column ids, used by the Custom view only. Empty selects the defaults.
    pub custom_columns: Vec<usize>,
}

impl ScreenRequest {
    /// A request for `view` with no filters, signal, sort or tickers.
    #[must_use]
    pub fn new(view: ViewVariant) -> Self {
        Self {
            view,
            signal: None,
            filters: Vec::new(),
            tickers: Vec::new(),
            sort: None,
            chart_style: ChartStyle::default(),
            timeframe: Timeframe::default(),
            custom_columns: Vec::new(),
        }
    }

    /// Set the predefined screen.
    #[must_use]
    pub const fn signal(mut self, signal: Signal) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Add one filter clause.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add several filter clauses.
    #[must_use]
    pub fn filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Restrict the result set to these tickers.
    #[must_use]
    pub fn tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tickers.extend(tickers.into_iter().map(Into::into));
        self
    }

    /// Set the sort.
    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set chart style and timeframe for the Charts view.
    #[must_use]
    pub const fn chart(mut self, style: ChartStyle, timeframe: Timeframe) -> Self {
        self.chart_style = style;
        self.timeframe = timeframe;
        self
    }

    /// Select custom column ids for the Custom view.
    #[must_use]
    pub fn columns(mut self, ids: impl IntoIterator<Item = usize>) -> Self {
        self.custom_columns.extend(ids);
        self
    }

    /// Custom column ids after applying the default selection.
    #[must_use]
    pub fn effective_columns(&self) -> &[usize] {
        if self.custom_columns.is_empty() {
            DEFAULT_CUSTOM_COLUMNS
        } else {
            &self.custom_columns
        }
    }

    /// Header list known before any page is fetched.
    ///
    /// `None` for composite views, whose headers are discovered from content.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unknown custom column id.
    pub fn expected_headers(&self) -> Result<Option<Vec<String>>, ScreenError> {
        if self.view == ViewVariant::Custom {
            let names = self
                .effective_columns()
                .iter()
                .map(|id| {
                    custom_column_name(*id)
                        .map(str::to_string)
                        .ok_or_else(|| ScreenError::InvalidArg(format!("unknown custom column id {id}")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Some(names));
        }
        Ok(self
            .view
            .static_headers()
            .map(|hs| hs.iter().map(|h| (*h).to_string()).collect()))
    }

    fn normalized_tickers(&self) -> Result<Vec<String>, ScreenError> {
        self.tickers.iter().map(|t| normalize_ticker(t)).collect()
    }

    /// Run every validation without building a URL.
    ///
    /// # Errors
    /// Same as [`build_screen_url`] minus base URL problems.
    pub fn validate(&self) -> Result<(), ScreenError> {
        self.query_pairs(None).map(|_| ())
    }

    fn query_pairs(&self, offset: Option<usize>) -> Result<Vec<(&'static str, String)>, ScreenError> {
        let mut pairs = vec![("v", self.view.code().to_string())];
        if let Some(signal) = self.signal {
            pairs.push(("s", signal.code().to_string()));
        }
        if !self.filters.is_empty() {
            let encoded: Vec<String> = self.filters.iter().map(Filter::encode).collect();
            pairs.push(("f", encoded.join(",")));
        }
        let tickers = self.normalized_tickers()?;
        if !tickers.is_empty() {
            pairs.push(("t", tickers.join(",")));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("o", sort.encode()?));
        }
        if self.view == ViewVariant::Custom {
            // validates the ids
            self.expected_headers()?;
            let ids: Vec<String> = self
                .effective_columns()
                .iter()
                .map(ToString::to_string)
                .collect();
            pairs.push(("c", ids.join(",")));
        }
        if self.view.layout() == ViewLayout::Chart {
            self.chart_style.validate(self.timeframe)?;
            let (ty, ta) = self.chart_style.codes();
            pairs.push(("ty", ty.to_string()));
            pairs.push(("ta", ta.to_string()));
            pairs.push(("p", self.timeframe.code().to_string()));
        }
        if let Some(r) = offset {
            pairs.push(("r", r.to_string()));
        }
        Ok(pairs)
    }
}

fn normalize_ticker(raw: &str) -> Result<String, ScreenError> {
    let t = raw.trim();
    if t.is_empty() {
        return Err(ScreenError::InvalidArg("ticker must not be empty".into()));
    }
    Ok(t.to_ascii_uppercase())
}

fn base(base_url: &str, path: &str) -> Result<Url, ScreenError> {
    let mut url = Url::parse(base_url).map_err(|e| ScreenError::invalid_url(base_url, e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ScreenError::invalid_url(base_url, "not a hierarchical URL"));
    }
    url.set_path(path);
    url.set_query(None);
    Ok(url)
}

/// Build the screener URL for `req`, optionally starting at row `offset`.
///
/// Parameters appear in a fixed order: `v`, `s`, `f`, `t`, `o`, `c`,
/// `ty`/`ta`/`p`, `r`. Page 1 is requested without `r`.
///
/// # Errors
/// Returns the request-construction error variants (`InvalidUrl`,
/// `UnknownSortField`, `InvalidChartStyle`, `InvalidArg`); never a partial URL.
pub fn build_screen_url(
    base_url: &str,
    req: &ScreenRequest,
    offset: Option<usize>,
) -> Result<String, ScreenError> {
    let pairs = req.query_pairs(offset)?;
    let mut url = base(base_url, SCREENER_PATH)?;
    {
        let mut q = url.query_pairs_mut();
        for (k, v) in &pairs {
            q.append_pair(k, v);
        }
    }
    Ok(url.into())
}

/// Build the single-ticker quote URL, `{base}/quote.ashx?t=TICKER`.
///
/// # Errors
/// Returns `InvalidArg` for an empty ticker and `InvalidUrl` for a malformed base.
pub fn build_quote_url(base_url: &str, ticker: &str) -> Result<String, ScreenError> {
    let ticker = normalize_ticker(ticker)?;
    let mut url = base(base_url, QUOTE_PATH)?;
    url.query_pairs_mut().append_pair("t", &ticker);
    Ok(url.into())
}
