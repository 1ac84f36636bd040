use futures::stream::{self, StreamExt};

use finscreen_core::{PageResult, ScreenError, ScreenRequest, Table, build_screen_url};

use super::merge::merge_pages;
use super::util::with_request_deadline;
use crate::Screener;
use crate::scrape::ViewContext;

/// Aggregation progress, logged at `debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScreenState {
    Init,
    FetchingFirstPage,
    FirstPageFailed,
    FirstPageOk,
    FetchingRemainingPages,
    Merging,
    Done,
}

#[allow(unused_variables)]
fn enter(state: ScreenState) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?state, "screen state");
}

/// Row offsets of pages 2..=`page_count`, given `stride` rows on page 1.
///
/// Page `i` (0-based over the remaining pages) starts at row
/// `stride * (i + 1) + 1`.
pub(crate) fn remaining_offsets(page_count: usize, stride: usize) -> Vec<usize> {
    (0..page_count.saturating_sub(1))
        .map(|i| stride * (i + 1) + 1)
        .collect()
}

impl Screener {
    /// Run a screen and return every page merged into one table.
    ///
    /// Behavior and trade-offs:
    /// - Page 1 is fetched first to learn the page count and the page stride
    ///   (its row count). The remaining pages are then fetched concurrently,
    ///   at most `max_concurrent_pages` at a time.
    /// - Rows are returned in page order regardless of completion order.
    /// - All-or-nothing: the first failing page aborts the screen with
    ///   `ScreenError::Page { page, .. }` and in-flight pages are dropped. No
    ///   partial table is returned.
    /// - Request validation (view extras, sort field, filters, base URL) happens
    ///   before any I/O.
    /// - With `request_timeout` set, the whole operation is bounded and fails
    ///   with `RequestTimeout`.
    ///
    /// # Errors
    /// Request-construction errors, `Page { page, source }` for fetch or scrape
    /// failures, `UnexpectedShape` from table assembly, or `RequestTimeout`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "finscreen::screen",
            skip(self, req),
            fields(view = %req.view, filters = req.filters.len()),
        )
    )]
    pub async fn screen(&self, req: &ScreenRequest) -> Result<Table, ScreenError> {
        enter(ScreenState::Init);
        let first_url = build_screen_url(&self.cfg.base_url, req, None)?;
        let ctx = ViewContext::for_request(req)?;
        with_request_deadline(
            self.cfg.request_timeout,
            "screen",
            self.screen_pages(req, &first_url, &ctx),
        )
        .await?
    }

    async fn screen_pages(
        &self,
        req: &ScreenRequest,
        first_url: &str,
        ctx: &ViewContext,
    ) -> Result<Table, ScreenError> {
        enter(ScreenState::FetchingFirstPage);
        let first = match self.fetch_and_scrape(first_url, req.view, ctx).await {
            Ok(page) => page,
            Err(e) => {
                enter(ScreenState::FirstPageFailed);
                return Err(e.on_page(1));
            }
        };
        enter(ScreenState::FirstPageOk);

        if first.page_count <= 1 || first.rows.is_empty() {
            enter(ScreenState::Merging);
            let table = merge_pages(vec![first]);
            enter(ScreenState::Done);
            return table;
        }

        let offsets = remaining_offsets(first.page_count, first.rows.len());
        let urls = offsets
            .into_iter()
            .map(|r| build_screen_url(&self.cfg.base_url, req, Some(r)))
            .collect::<Result<Vec<_>, _>>()?;

        enter(ScreenState::FetchingRemainingPages);
        #[cfg(feature = "tracing")]
        tracing::info!(
            pages = urls.len(),
            stride = first.rows.len(),
            concurrency = self.cfg.max_concurrent_pages,
            "fetching remaining pages"
        );

        let rest = self.fetch_remaining(req, &urls, ctx).await?;

        enter(ScreenState::Merging);
        let mut pages = Vec::with_capacity(rest.len() + 1);
        pages.push(first);
        pages.extend(rest);
        let table = merge_pages(pages);
        enter(ScreenState::Done);
        table
    }

    /// Fetch pages 2.. with bounded parallelism into page-indexed slots.
    ///
    /// Returning early drops the stream, which cancels every page still in
    /// flight.
    async fn fetch_remaining(
        &self,
        req: &ScreenRequest,
        urls: &[String],
        ctx: &ViewContext,
    ) -> Result<Vec<PageResult>, ScreenError> {
        let view = req.view;
        let mut slots: Vec<Option<PageResult>> = vec![None; urls.len()];
        let mut pending = stream::iter(urls.iter().enumerate())
            .map(|(i, url)| async move { (i, self.fetch_and_scrape(url, view, ctx).await) })
            .buffer_unordered(self.cfg.max_concurrent_pages.max(1));

        while let Some((i, res)) = pending.next().await {
            match res {
                Ok(page) => slots[i] = Some(page),
                Err(e) => return Err(e.on_page(i + 2)),
            }
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| slot.ok_or_else(|| ScreenError::data(format!("page {} missing", i + 2))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_first_page_stride() {
        assert_eq!(remaining_offsets(1, 20), Vec::<usize>::new());
        assert_eq!(remaining_offsets(4, 20), vec![21, 41, 61]);
        assert_eq!(remaining_offsets(3, 7), vec![8, 15]);
    }
}
