use finscreen_core::{HeaderSet, PageResult, ScreenError, Table, assemble};

/// Concatenate pages in the given order and render them as one table.
///
/// Headers keep the first page's order; a header first seen on a later page is
/// appended at the point it is first seen.
pub(crate) fn merge_pages(pages: Vec<PageResult>) -> Result<Table, ScreenError> {
    let mut headers = HeaderSet::new();
    let mut rows = Vec::with_capacity(pages.iter().map(|p| p.rows.len()).sum());
    for page in pages {
        headers.extend(page.headers.iter().map(String::as_str));
        rows.extend(page.rows);
    }
    assemble(headers.as_slice(), &rows)
}
