// Shared fixtures so tests can `use crate::helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;

use finscreen::{BackoffConfig, HttpTransport, Screener, ScreenerBuilder, ViewVariant};
use finscreen_mock::fixtures::{self, Company};
use finscreen_mock::{DynamicMockController, DynamicMockTransport, MockTransport};

/// Backoff without jitter and with tiny delays, so retries stay fast under
/// real time and deterministic under paused time.
pub const fn fast_backoff() -> BackoffConfig {
    BackoffConfig {
        min_backoff_ms: 1,
        max_backoff_ms: 8,
        factor: 2,
        jitter_percent: 0,
    }
}

/// Builder wired to `transport` with fast retries.
pub fn builder(transport: Arc<dyn HttpTransport>) -> ScreenerBuilder {
    Screener::builder()
        .with_transport(transport)
        .backoff(fast_backoff())
}

/// Screener over the static fixture universe.
pub fn static_screener() -> Screener {
    builder(Arc::new(MockTransport::new()))
        .build()
        .expect("screener")
}

/// Screener over a scriptable transport, plus its controller.
pub fn dynamic_screener(max_attempts: u32) -> (Screener, DynamicMockController) {
    dynamic_screener_with(|b| b.max_attempts(max_attempts))
}

/// Scriptable screener with extra builder settings applied.
pub fn dynamic_screener_with(
    configure: impl FnOnce(ScreenerBuilder) -> ScreenerBuilder,
) -> (Screener, DynamicMockController) {
    let (transport, controller) = DynamicMockTransport::new_with_controller();
    let screener = configure(builder(transport)).build().expect("screener");
    (screener, controller)
}

pub fn overview_headers() -> Vec<String> {
    ViewVariant::Overview
        .static_headers()
        .expect("overview headers")
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Overview page `page` (1-based) with `per_page` rows out of `page_count`.
pub fn overview_page(page: usize, per_page: usize, page_count: usize) -> String {
    let companies = page_companies(page, per_page);
    fixtures::fixed_page(
        &overview_headers(),
        &companies,
        (page - 1) * per_page + 1,
        page_count,
    )
}

/// Companies shown on page `page` (1-based) when pages hold `per_page` rows.
pub fn page_companies(page: usize, per_page: usize) -> Vec<Company> {
    fixtures::universe(page * per_page)
        .into_iter()
        .skip((page - 1) * per_page)
        .collect()
}

/// Tickers of the first `n` companies in ranking order.
pub fn ranked_tickers(n: usize) -> Vec<String> {
    fixtures::universe(n).into_iter().map(|c| c.ticker).collect()
}

/// Row offset of page `page` (1-based) when pages hold `per_page` rows.
pub const fn offset_of(page: usize, per_page: usize) -> usize {
    (page - 1) * per_page + 1
}
