use finscreen_core::{HttpResponse, PageResult, ScreenError, ViewVariant};

use super::backoff::retry_delay;
use crate::Screener;
use crate::scrape::{ViewContext, scrape_page};

impl Screener {
    fn classify(&self, url: &str, resp: HttpResponse) -> Result<String, ScreenError> {
        if resp.status != 200 {
            return Err(ScreenError::http_status(url, resp.status, &resp.body));
        }
        if self.cfg.rate_limit_sentinels.contains(&resp.body) {
            return Err(ScreenError::RateLimited {
                url: url.to_string(),
            });
        }
        Ok(resp.body)
    }

    /// GET `url` with the configured retry policy and return the body.
    ///
    /// Behavior and trade-offs:
    /// - Transport failures, non-200 statuses and rate-limit sentinel bodies are
    ///   retried with exponential backoff plus jitter, up to `max_attempts` total
    ///   attempts.
    /// - Permanent failures (`InvalidUrl` and anything else not retryable) return
    ///   immediately.
    /// - Exhausting the budget returns the last observed error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "finscreen::fetch_page",
            skip(self),
            fields(transport = self.transport.name()),
        )
    )]
    pub(crate) async fn fetch_page(&self, url: &str) -> Result<String, ScreenError> {
        let retry = &self.cfg.retry;
        let max_attempts = retry.max_attempts.max(1);
        let mut attempt: u32 = 0;
        loop {
            let outcome = match self.transport.get(url).await {
                Ok(resp) => self.classify(url, resp),
                Err(e) => Err(e),
            };
            let err = match outcome {
                Ok(body) => return Ok(body),
                Err(e) => e,
            };
            attempt += 1;
            if !err.is_retryable() || attempt >= max_attempts {
                return Err(err);
            }
            let wait = retry_delay(&retry.backoff, attempt - 1);
            #[cfg(feature = "tracing")]
            tracing::warn!(
                url,
                attempt,
                max_attempts,
                wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
                error = %err,
                "page fetch failed; retrying"
            );
            tokio::time::sleep(wait).await;
        }
    }

    /// Fetch one screener page and scrape it synchronously.
    pub(crate) async fn fetch_and_scrape(
        &self,
        url: &str,
        view: ViewVariant,
        ctx: &ViewContext,
    ) -> Result<PageResult, ScreenError> {
        let body = self.fetch_page(url).await?;
        scrape_page(view, ctx, &body)
    }
}
