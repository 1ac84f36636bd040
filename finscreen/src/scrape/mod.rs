//! HTML scrapers for every view layout.
//!
//! A page is parsed once into a `scraper::Html` document and read synchronously;
//! the document never lives across an `.await`, so callers can scrape inside
//! `Send` futures.

mod bulk;
mod composite;
mod fixed;
mod tooltip;

pub use bulk::transpose_columns;
pub use tooltip::{Tooltip, parse_tooltip};

use finscreen_core::{
    PageResult, RawRecord, ScreenError, ScreenRequest, ViewLayout, ViewVariant,
};
use scraper::{ElementRef, Html, Selector};

/// Per-request scraping context.
///
/// Fixed-column views read cells positionally and need their header list up
/// front; for Custom that list depends on the caller's column selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
    headers: Vec<String>,
}

impl ViewContext {
    /// Context with an explicit header list for positional views.
    #[must_use]
    pub const fn with_headers(headers: Vec<String>) -> Self {
        Self { headers }
    }

    /// Context derived from a request.
    ///
    /// # Errors
    /// Returns `InvalidArg` for unknown custom column ids.
    pub fn for_request(req: &ScreenRequest) -> Result<Self, ScreenError> {
        Ok(Self {
            headers: req.expected_headers()?.unwrap_or_default(),
        })
    }

    /// Headers known before scraping; empty for composite views.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

/// Scrape one screener page rendered in `view`.
///
/// # Errors
/// Returns `ScreenError::Data` when the markup does not match the layout
/// (wrong cell count, malformed tooltip, satellite block before any snapshot
/// block, missing ticker).
pub fn scrape_page(
    view: ViewVariant,
    ctx: &ViewContext,
    html: &str,
) -> Result<PageResult, ScreenError> {
    let doc = Html::parse_document(html);
    let page_count = page_count(&doc)?;
    let (headers, rows) = match view.layout() {
        ViewLayout::Fixed => fixed::scrape(&doc, ctx.headers())?,
        ViewLayout::Composite => {
            composite::scrape(&doc, composite::SCREENER_BLOCKS, view.satellites())?
        }
        ViewLayout::Chart | ViewLayout::Tickers => tooltip::scrape(&doc)?,
        ViewLayout::Bulk => bulk::scrape(&doc, view == ViewVariant::BulkFull)?,
    };
    Ok(PageResult {
        rows,
        headers,
        page_count,
    })
}

/// Scrape a single-ticker quote page with every satellite block.
///
/// # Errors
/// Same as [`scrape_page`] for composite views.
pub fn scrape_quote(html: &str) -> Result<PageResult, ScreenError> {
    let doc = Html::parse_document(html);
    let (headers, rows) = composite::scrape(
        &doc,
        composite::QUOTE_BLOCKS,
        &finscreen_core::Satellite::ALL,
    )?;
    Ok(PageResult {
        rows,
        headers,
        page_count: 1,
    })
}

/// Number of pages in the result set: the options of the page selector, or 1.
fn page_count(doc: &Html) -> Result<usize, ScreenError> {
    let sel = selector("select#pageSelect option")?;
    Ok(doc.select(&sel).count().max(1))
}

pub(crate) fn selector(css: &str) -> Result<Selector, ScreenError> {
    Selector::parse(css).map_err(|e| ScreenError::Other(format!("invalid selector {css}: {e}")))
}

/// Element text with whitespace runs collapsed.
pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Text field, with blank cells stored as absent.
pub(crate) fn text_field(record: &mut RawRecord, header: &str, text: String) {
    if text.is_empty() {
        record.insert(header, finscreen_core::FieldValue::Absent);
    } else {
        record.insert(header, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_defaults_to_one() {
        let doc = Html::parse_document("<html><body><p>no pager</p></body></html>");
        assert_eq!(page_count(&doc).unwrap(), 1);
        let doc = Html::parse_document(
            r#"<select id="pageSelect"><option>1</option><option>2</option><option>3</option></select>"#,
        );
        assert_eq!(page_count(&doc).unwrap(), 3);
    }

    #[test]
    fn text_is_whitespace_normalized() {
        let doc = Html::parse_fragment("<p>  Apple \n  Inc. </p>");
        let p = doc.select(&selector("p").unwrap()).next().unwrap();
        assert_eq!(text_of(p), "Apple Inc.");
    }
}
