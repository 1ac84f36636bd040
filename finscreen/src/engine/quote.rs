use futures::stream::{self, StreamExt};

use finscreen_core::{Record, ScreenError, build_quote_url};

use super::merge::merge_pages;
use super::util::with_request_deadline;
use crate::Screener;
use crate::scrape::scrape_quote;

impl Screener {
    /// Fetch the quote page for one ticker as a single record.
    ///
    /// The quote page uses the composite snapshot layout with every satellite
    /// block (ratings, news, description, insider trading).
    ///
    /// # Errors
    /// `InvalidArg` for an empty ticker, fetch errors after retries, `Data` when
    /// the page carries no snapshot block, or `RequestTimeout`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "finscreen::quote", skip(self))
    )]
    pub async fn quote(&self, ticker: &str) -> Result<Record, ScreenError> {
        let url = build_quote_url(&self.cfg.base_url, ticker)?;
        with_request_deadline(self.cfg.request_timeout, "quote", async {
            let body = self.fetch_page(&url).await?;
            let page = scrape_quote(&body)?;
            Record::from_table(merge_pages(vec![page])?)
        })
        .await?
    }

    /// Fetch quotes for several tickers.
    ///
    /// Behavior and trade-offs:
    /// - Runs single-quote requests concurrently, bounded by
    ///   `max_concurrent_pages`.
    /// - Returns `(records, failures)`: successes in input order, and each failed
    ///   ticker with its error. One bad ticker never fails the batch.
    pub async fn quotes<S: AsRef<str>>(
        &self,
        tickers: &[S],
    ) -> (Vec<Record>, Vec<(String, ScreenError)>) {
        let results: Vec<(String, Result<Record, ScreenError>)> =
            stream::iter(tickers.iter().map(|t| t.as_ref().to_string()))
                .map(|ticker| async move {
                    let res = self.quote(&ticker).await;
                    (ticker, res)
                })
                .buffered(self.cfg.max_concurrent_pages.max(1))
                .collect()
                .await;

        let mut ok = Vec::new();
        let mut failures = Vec::new();
        for (ticker, res) in results {
            match res {
                Ok(record) => ok.push(record),
                Err(e) => failures.push((ticker, e)),
            }
        }
        (ok, failures)
    }
}
