//! Rectangular string tables and the assembler that builds them from raw records.

use serde::Serialize;

use crate::classify::column_type;
use crate::record::{FieldValue, RawRecord};
use crate::{ColumnType, PLACEHOLDER, ScreenError};

/// Final screener output: a header row and equally long rows of rendered cells.
///
/// Cells are strings exactly as displayed upstream; absent values render as
/// `"-"` and satellite lists render as compact JSON arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, checking that every row matches the header length.
    ///
    /// # Errors
    /// Returns `ScreenError::Data` when a row has the wrong number of cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, ScreenError> {
        if let Some((i, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != headers.len())
        {
            return Err(ScreenError::data(format!(
                "row {i} has {} cells, expected {}",
                row.len(),
                headers.len()
            )));
        }
        Ok(Self { headers, rows })
    }

    /// Header row.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in output order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of `header` in the header row.
    #[must_use]
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// All cells of one column, top to bottom.
    #[must_use]
    pub fn column(&self, header: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(header)?;
        Some(self.rows.iter().map(|r| r[idx].as_str()).collect())
    }

    /// Cell at `row` under `header`.
    #[must_use]
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let idx = self.column_index(header)?;
        self.rows.get(row).map(|r| r[idx].as_str())
    }

    /// Semantic type of every column, in header order.
    ///
    /// # Errors
    /// Returns `ScreenError::UnknownColumn` if any header is not classified.
    pub fn column_types(&self) -> Result<Vec<ColumnType>, ScreenError> {
        self.headers.iter().map(|h| column_type(h)).collect()
    }

    /// Split into the header row and data rows.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.headers, self.rows)
    }
}

/// One row paired with its headers, as returned for single-ticker lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    headers: Vec<String>,
    values: Vec<String>,
}

impl Record {
    /// Take the first row of `table`.
    ///
    /// # Errors
    /// Returns `ScreenError::Data` when the table has no rows.
    pub fn from_table(table: Table) -> Result<Self, ScreenError> {
        let (headers, rows) = table.into_parts();
        let values = rows
            .into_iter()
            .next()
            .ok_or_else(|| ScreenError::data("no row found"))?;
        Ok(Self { headers, values })
    }

    /// Value under `header`.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == header)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Header names.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Values aligned with [`Record::headers`].
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// `(header, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .zip(&self.values)
            .map(|(h, v)| (h.as_str(), v.as_str()))
    }
}

/// Render raw records into a rectangular table under `headers`.
///
/// Behavior and trade-offs:
/// - Each output row has exactly `headers.len()` cells, in header order.
/// - Missing or absent fields render as `"-"`.
/// - Satellite lists render as a compact JSON array of objects whose keys keep
///   their scraped order; an empty list renders as `"-"`.
/// - Nested markup is rejected with `ScreenError::UnexpectedShape` rather than
///   flattened, so layout drift upstream surfaces loudly.
///
/// # Errors
/// Returns `UnexpectedShape` for unrenderable values, or `Data` if a list
/// fails to serialize.
pub fn assemble(headers: &[String], records: &[RawRecord]) -> Result<Table, ScreenError> {
    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let row = headers
            .iter()
            .map(|h| render(record, h))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(Table {
        headers: headers.to_vec(),
        rows,
    })
}

fn render(record: &RawRecord, header: &str) -> Result<String, ScreenError> {
    match record.get(header) {
        None | Some(FieldValue::Absent) => Ok(PLACEHOLDER.to_string()),
        Some(FieldValue::Text(t)) if t.trim().is_empty() => Ok(PLACEHOLDER.to_string()),
        Some(FieldValue::Text(t)) => Ok(t.clone()),
        Some(FieldValue::List(items)) if items.is_empty() => Ok(PLACEHOLDER.to_string()),
        Some(FieldValue::List(items)) => serde_json::to_string(items)
            .map_err(|e| ScreenError::data(format!("failed to encode {header}: {e}"))),
        Some(other) => Err(ScreenError::UnexpectedShape {
            ticker: record.ticker().unwrap_or("?").to_string(),
            header: header.to_string(),
            found: other.kind().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Labeled;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn missing_and_blank_fields_render_placeholder() {
        let records = vec![
            RawRecord::new().with("Ticker", "AAPL").with("P/E", ""),
            RawRecord::new()
                .with("Ticker", "MSFT")
                .with("P/E", FieldValue::Absent),
        ];
        let table = assemble(&headers(&["Ticker", "P/E", "Price"]), &records).unwrap();
        assert_eq!(table.rows()[0], ["AAPL", "-", "-"]);
        assert_eq!(table.rows()[1], ["MSFT", "-", "-"]);
    }

    #[test]
    fn lists_render_as_ordered_json() {
        let news = vec![Labeled::new().with("Date", "Mar-05-24").with("Title", "Up")];
        let records = vec![RawRecord::new().with("Ticker", "AAPL").with("News", news)];
        let table = assemble(&headers(&["Ticker", "News"]), &records).unwrap();
        assert_eq!(
            table.cell(0, "News"),
            Some(r#"[{"Date":"Mar-05-24","Title":"Up"}]"#)
        );
    }

    #[test]
    fn nested_markup_is_rejected() {
        let records = vec![
            RawRecord::new()
                .with("Ticker", "AAPL")
                .with("Index", FieldValue::Markup("<table></table>".into())),
        ];
        let err = assemble(&headers(&["Ticker", "Index"]), &records).unwrap_err();
        assert_eq!(
            err,
            ScreenError::UnexpectedShape {
                ticker: "AAPL".into(),
                header: "Index".into(),
                found: "nested markup".into(),
            }
        );
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let err = Table::new(headers(&["a", "b"]), vec![vec!["1".into()]]).unwrap_err();
        assert!(matches!(err, ScreenError::Data(_)));
    }

    #[test]
    fn record_from_empty_table_fails() {
        let table = Table::new(headers(&["Ticker"]), vec![]).unwrap();
        assert!(Record::from_table(table).is_err());
    }
}
