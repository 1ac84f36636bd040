use async_trait::async_trait;
use url::Url;

use finscreen_core::{
    DEFAULT_CUSTOM_COLUMNS, HttpResponse, HttpTransport, RATE_LIMIT_SENTINEL, Satellite,
    ScreenError, ViewLayout, ViewVariant, custom_column_name,
};

mod dynamic;
pub mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockTransport, MockBehavior, MockRoute};

use fixtures::Company;

/// Number of companies the static mock screens over.
pub const UNIVERSE_SIZE: usize = 45;

/// Mock transport for CI-safe examples. Serves deterministic screener and
/// quote pages built from static fixtures.
///
/// Special tickers: `FAIL` fails with a transport error and `LIMIT` answers
/// with the soft rate-limit sentinel.
pub struct MockTransport;

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Rows per page the mock renders for a layout.
    #[must_use]
    pub const fn page_size(layout: ViewLayout) -> usize {
        match layout {
            ViewLayout::Fixed => 20,
            ViewLayout::Composite => 10,
            ViewLayout::Chart | ViewLayout::Tickers => 30,
            ViewLayout::Bulk => 40,
        }
    }

    /// Columns in a rendered bulk grid.
    pub const BULK_COLUMNS: usize = 4;

    fn maybe_fail(url: &Url, ticker: &str) -> Result<Option<HttpResponse>, ScreenError> {
        match ticker {
            "FAIL" => Err(ScreenError::transport(
                url.as_str(),
                format!("forced failure for {ticker}"),
            )),
            "LIMIT" => Ok(Some(HttpResponse::ok(RATE_LIMIT_SENTINEL))),
            _ => Ok(None),
        }
    }

    fn screen(url: &Url) -> Result<HttpResponse, ScreenError> {
        let param = |name: &str| {
            url.query_pairs()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.into_owned())
        };
        let view = match param("v").map(|v| v.parse::<ViewVariant>()) {
            Some(Ok(view)) => view,
            Some(Err(_)) | None => return Ok(HttpResponse::with_status(400, "unknown view")),
        };

        let mut companies = fixtures::universe(UNIVERSE_SIZE);
        if let Some(tickers) = param("t") {
            for t in tickers.split(',') {
                if let Some(resp) = Self::maybe_fail(url, t)? {
                    return Ok(resp);
                }
            }
            companies.retain(|c| tickers.split(',').any(|t| t == c.ticker));
        }

        let layout = view.layout();
        let size = Self::page_size(layout);
        let page_count = companies.len().div_ceil(size).max(1);
        let offset = param("r")
            .and_then(|r| r.parse::<usize>().ok())
            .unwrap_or(1)
            .saturating_sub(1);
        let page: Vec<Company> = companies.into_iter().skip(offset).take(size).collect();

        let body = match layout {
            ViewLayout::Fixed => {
                let headers = Self::fixed_headers(view, param("c").as_deref());
                fixtures::fixed_page(&headers, &page, offset + 1, page_count)
            }
            ViewLayout::Composite => {
                let mut blocks = Vec::with_capacity(page.len() * 2);
                for company in &page {
                    blocks.push(fixtures::snapshot_block(company));
                    let satellites = fixtures::satellite_blocks(company);
                    for (satellite, block) in Satellite::ALL.iter().zip(satellites) {
                        if view.satellites().contains(satellite) {
                            blocks.push(block);
                        }
                    }
                }
                fixtures::composite_page(&blocks, page_count)
            }
            ViewLayout::Chart => fixtures::chart_page(&page, page_count),
            ViewLayout::Tickers => fixtures::tickers_page(&page, page_count),
            ViewLayout::Bulk => {
                let columns = fixtures::bulk_columns(&page, Self::BULK_COLUMNS);
                fixtures::bulk_page(&columns, view == ViewVariant::BulkFull, page_count)
            }
        };
        Ok(HttpResponse::ok(body))
    }

    fn fixed_headers(view: ViewVariant, columns: Option<&str>) -> Vec<String> {
        if let Some(headers) = view.static_headers() {
            return headers.iter().map(ToString::to_string).collect();
        }
        let ids: Vec<usize> = match columns {
            Some(c) => c.split(',').filter_map(|id| id.parse().ok()).collect(),
            None => DEFAULT_CUSTOM_COLUMNS.to_vec(),
        };
        ids.into_iter()
            .filter_map(custom_column_name)
            .map(ToString::to_string)
            .collect()
    }

    fn quote(url: &Url) -> Result<HttpResponse, ScreenError> {
        let ticker = url
            .query_pairs()
            .find(|(k, _)| k == "t")
            .map(|(_, v)| v.to_ascii_uppercase())
            .unwrap_or_default();
        if let Some(resp) = Self::maybe_fail(url, &ticker)? {
            return Ok(resp);
        }
        Ok(fixtures::by_ticker(&ticker, UNIVERSE_SIZE).map_or_else(
            || HttpResponse::with_status(404, format!("no quote for {ticker}")),
            |company| HttpResponse::ok(fixtures::full_quote_page(&company)),
        ))
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    fn name(&self) -> &'static str {
        "finscreen-mock"
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, ScreenError> {
        let parsed = Url::parse(url).map_err(|e| ScreenError::invalid_url(url, e.to_string()))?;
        match parsed.path() {
            "/screener.ashx" => Self::screen(&parsed),
            "/quote.ashx" => Self::quote(&parsed),
            other => Ok(HttpResponse::with_status(404, format!("no page at {other}"))),
        }
    }
}
