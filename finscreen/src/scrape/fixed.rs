use finscreen_core::{RawRecord, ScreenError};
use scraper::Html;

use super::{selector, text_field, text_of};

/// One `tr.styled-row` per ticker, cells read positionally against `headers`.
pub(super) fn scrape(
    doc: &Html,
    headers: &[String],
) -> Result<(Vec<String>, Vec<RawRecord>), ScreenError> {
    let row_sel = selector("table.screener_table tr.styled-row")?;
    let cell_sel = selector("td")?;

    let mut rows = Vec::new();
    for (i, tr) in doc.select(&row_sel).enumerate() {
        let cells: Vec<String> = tr.select(&cell_sel).map(text_of).collect();
        if cells.len() != headers.len() {
            return Err(ScreenError::data(format!(
                "screener row {} has {} cells, expected {}",
                i + 1,
                cells.len(),
                headers.len()
            )));
        }
        let mut record = RawRecord::new();
        for (header, cell) in headers.iter().zip(cells) {
            text_field(&mut record, header, cell);
        }
        rows.push(record);
    }
    Ok((headers.to_vec(), rows))
}
