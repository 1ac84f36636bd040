use finscreen_core::{FieldValue, RawRecord, ScreenError, TOOLTIP_HEADERS};
use scraper::Html;

use super::tooltip::{Tooltip, tooltip_of};
use super::{selector, text_of};

/// Turn column-major groups into row-major rows.
///
/// Row `i` holds the `i`-th element of every column that still has one, in
/// column order. Exhausted columns are skipped, so later elements never shift
/// into another column's position. The number of rows is the longest column's
/// length.
///
/// ```
/// use finscreen::scrape::transpose_columns;
///
/// let rows = transpose_columns(vec![vec![1, 4], vec![2, 5], vec![3]]);
/// assert_eq!(rows, vec![vec![1, 2, 3], vec![4, 5]]);
/// ```
#[must_use]
pub fn transpose_columns<T>(columns: Vec<Vec<T>>) -> Vec<Vec<T>> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    let mut iters: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
    (0..height)
        .map(|_| iters.iter_mut().filter_map(Iterator::next).collect())
        .collect()
}

/// `table.bulk-grid td.bulk-column` columns of stacked `div.bulk-entry` cells.
pub(super) fn scrape(
    doc: &Html,
    with_quote: bool,
) -> Result<(Vec<String>, Vec<RawRecord>), ScreenError> {
    let column_sel = selector("table.bulk-grid td.bulk-column")?;
    let entry_sel = selector("div.bulk-entry")?;
    let tip_sel = selector("[data-boxover]")?;
    let price_sel = selector("span.bulk-price")?;
    let change_sel = selector("span.bulk-change")?;

    let mut columns: Vec<Vec<RawRecord>> = Vec::new();
    for column in doc.select(&column_sel) {
        let mut entries = Vec::new();
        for entry in column.select(&entry_sel) {
            let tip = entry
                .select(&tip_sel)
                .next()
                .ok_or_else(|| ScreenError::data("bulk entry without tooltip"))?;
            let mut record = tooltip_of(tip).map(Tooltip::into_record)?;
            if with_quote {
                for (header, sel) in [("Price", &price_sel), ("Change", &change_sel)] {
                    let value = entry
                        .select(sel)
                        .next()
                        .map(text_of)
                        .filter(|t| !t.is_empty())
                        .map_or(FieldValue::Absent, FieldValue::Text);
                    record.insert(header, value);
                }
            }
            entries.push(record);
        }
        columns.push(entries);
    }

    let rows = transpose_columns(columns).into_iter().flatten().collect();
    let mut headers: Vec<String> = TOOLTIP_HEADERS.iter().map(|h| (*h).to_string()).collect();
    if with_quote {
        headers.extend(["Price".to_string(), "Change".to_string()]);
    }
    Ok((headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn uneven_columns_do_not_shift() {
        let cols = vec![
            vec!["a0", "a1", "a2", "a3", "a4"],
            vec!["b0", "b1", "b2", "b3", "b4"],
            vec!["c0", "c1", "c2"],
        ];
        let rows = transpose_columns(cols);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2], ["a2", "b2", "c2"]);
        assert_eq!(rows[3], ["a3", "b3"]);
        assert_eq!(rows[4], ["a4", "b4"]);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(transpose_columns::<u8>(vec![]).is_empty());
        assert!(transpose_columns::<u8>(vec![vec![], vec![]]).is_empty());
    }

    proptest! {
        #[test]
        fn transpose_preserves_elements(lens in prop::collection::vec(0usize..8, 0..6)) {
            let cols: Vec<Vec<(usize, usize)>> = lens
                .iter()
                .enumerate()
                .map(|(c, n)| (0..*n).map(|r| (c, r)).collect())
                .collect();
            let total: usize = lens.iter().sum();
            let rows = transpose_columns(cols);
            prop_assert_eq!(rows.len(), lens.iter().copied().max().unwrap_or(0));
            prop_assert_eq!(rows.iter().map(Vec::len).sum::<usize>(), total);
            for (r, row) in rows.iter().enumerate() {
                // every element of row r came from position r of its column, in column order
                prop_assert!(row.iter().all(|(_, rr)| *rr == r));
                prop_assert!(row.windows(2).all(|w| w[0].0 < w[1].0));
            }
        }
    }
}
