//! Composite views: one snapshot block per ticker followed by satellite blocks.
//!
//! The block container is a flat list of siblings. A `div.snapshot-block`
//! opens a new record; every recognized satellite block after it attaches to
//! that record until the next snapshot block. Blocks are recognized by class,
//! never by position.

use finscreen_core::{FieldValue, HeaderSet, Labeled, RawRecord, Satellite, ScreenError};
use scraper::{ElementRef, Html};

use super::{has_class, selector, text_field, text_of};

pub(super) const SCREENER_BLOCKS: &str = "div.screener-blocks";
pub(super) const QUOTE_BLOCKS: &str = "div.quote-blocks";

const TITLE_HEADERS: [&str; 5] = ["Ticker", "Company", "Sector", "Industry", "Country"];
const RATING_FIELDS: [&str; 5] = ["Date", "Action", "Analyst", "Rating", "Price Target"];

fn satellite_of(block: ElementRef<'_>) -> Option<Satellite> {
    if has_class(block, "ratings-block") {
        Some(Satellite::Ratings)
    } else if has_class(block, "news-block") {
        Some(Satellite::News)
    } else if has_class(block, "profile-block") {
        Some(Satellite::Description)
    } else if has_class(block, "insider-block") {
        Some(Satellite::InsiderTrading)
    } else {
        None
    }
}

pub(super) fn scrape(
    doc: &Html,
    container_css: &str,
    wanted: &[Satellite],
) -> Result<(Vec<String>, Vec<RawRecord>), ScreenError> {
    let container_sel = selector(container_css)?;
    let Some(container) = doc.select(&container_sel).next() else {
        return Ok((Vec::new(), Vec::new()));
    };

    let mut headers = HeaderSet::new();
    let mut rows: Vec<RawRecord> = Vec::new();
    for block in container.children().filter_map(ElementRef::wrap) {
        if has_class(block, "snapshot-block") {
            rows.push(read_snapshot(block, &mut headers)?);
            continue;
        }
        let Some(satellite) = satellite_of(block) else {
            continue;
        };
        let Some(current) = rows.last_mut() else {
            return Err(ScreenError::data(format!(
                "{} block appears before any snapshot block",
                satellite.header()
            )));
        };
        if !wanted.contains(&satellite) {
            continue;
        }
        if let Some(value) = read_satellite(satellite, block)? {
            headers.insert(satellite.header());
            current.insert(satellite.header(), value);
        }
    }
    Ok((headers.into_vec(), rows))
}

/// Title block plus the label/value snapshot table.
fn read_snapshot(block: ElementRef<'_>, headers: &mut HeaderSet) -> Result<RawRecord, ScreenError> {
    let ticker_sel = selector(".fullview-title a.fullview-ticker")?;
    let company_sel = selector(".fullview-title span.fullview-company")?;
    let links_sel = selector(".fullview-title div.fullview-links a")?;
    let label_sel = selector("table.snapshot-table2 td.snapshot-td2-cp")?;
    let nested_sel = selector("table")?;

    let ticker = block
        .select(&ticker_sel)
        .next()
        .map(text_of)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ScreenError::data("snapshot block without ticker"))?;

    let mut record = RawRecord::new();
    headers.extend(TITLE_HEADERS);
    record.insert(TITLE_HEADERS[0], ticker);
    let company = block.select(&company_sel).next().map(text_of).unwrap_or_default();
    text_field(&mut record, TITLE_HEADERS[1], company);

    let mut links = block.select(&links_sel).map(text_of);
    for header in &TITLE_HEADERS[2..] {
        text_field(&mut record, header, links.next().unwrap_or_default());
    }

    for label_cell in block.select(&label_sel) {
        let label = text_of(label_cell);
        if label.is_empty() {
            continue;
        }
        let value_cell = label_cell
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .next()
            .filter(|td| has_class(*td, "snapshot-td2"));
        let value = match value_cell {
            None => FieldValue::Absent,
            Some(td) if td.select(&nested_sel).next().is_some() => {
                FieldValue::Markup(td.inner_html())
            }
            Some(td) => {
                let text = text_of(td);
                if text.is_empty() {
                    FieldValue::Absent
                } else {
                    FieldValue::Text(text)
                }
            }
        };
        let label = distinct_label(&record, label);
        headers.insert(&label);
        record.insert(label, value);
    }
    Ok(record)
}

/// Snapshot tables repeat some labels (`EPS next Y` is listed as an estimate
/// and as a growth rate). The n-th occurrence becomes `"{label} ({n})"`.
fn distinct_label(record: &RawRecord, label: String) -> String {
    if record.get(&label).is_none() {
        return label;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{label} ({n})");
        if record.get(&candidate).is_none() {
            return candidate;
        }
        n += 1;
    }
}

/// `None` when the block is present but carries nothing.
fn read_satellite(
    satellite: Satellite,
    block: ElementRef<'_>,
) -> Result<Option<FieldValue>, ScreenError> {
    let value = match satellite {
        Satellite::Ratings => list(read_ratings(block)?),
        Satellite::News => list(read_news(block)?),
        Satellite::InsiderTrading => list(read_insider(block)?),
        Satellite::Description => {
            let sel = selector("td.fullview-profile")?;
            block
                .select(&sel)
                .next()
                .map(text_of)
                .filter(|t| !t.is_empty())
                .map(FieldValue::Text)
        }
    };
    Ok(value)
}

fn list(items: Vec<Labeled>) -> Option<FieldValue> {
    (!items.is_empty()).then_some(FieldValue::List(items))
}

fn cells(tr: ElementRef<'_>) -> Result<Vec<ElementRef<'_>>, ScreenError> {
    let td = selector("td")?;
    Ok(tr.select(&td).collect())
}

fn read_ratings(block: ElementRef<'_>) -> Result<Vec<Labeled>, ScreenError> {
    let row_sel = selector("table.fullview-ratings-outer tr")?;
    let mut items = Vec::new();
    for tr in block.select(&row_sel) {
        let tds = cells(tr)?;
        if tds.is_empty() {
            continue;
        }
        if tds.len() != RATING_FIELDS.len() {
            return Err(ScreenError::data(format!(
                "ratings row has {} cells, expected {}",
                tds.len(),
                RATING_FIELDS.len()
            )));
        }
        let mut item = Labeled::new();
        for (field, td) in RATING_FIELDS.iter().zip(tds) {
            item.push(*field, text_of(td));
        }
        items.push(item);
    }
    Ok(items)
}

/// Headline rows. A row whose date cell holds only a time shares the date of
/// the row above it.
fn read_news(block: ElementRef<'_>) -> Result<Vec<Labeled>, ScreenError> {
    let row_sel = selector("table.fullview-news-outer tr")?;
    let link_sel = selector("a")?;
    let source_sel = selector("span.news-source")?;

    let mut items = Vec::new();
    let mut last_date: Option<String> = None;
    for tr in block.select(&row_sel) {
        let tds = cells(tr)?;
        let [date_cell, body_cell, ..] = tds.as_slice() else {
            continue;
        };
        let stamp = text_of(*date_cell);
        let date = match stamp.split_once(' ') {
            Some((day, _)) => {
                last_date = Some(day.to_string());
                stamp.clone()
            }
            None => match &last_date {
                Some(day) => format!("{day} {stamp}"),
                None => stamp.clone(),
            },
        };
        let link = body_cell.select(&link_sel).next();
        let title = link.map(text_of).unwrap_or_else(|| text_of(*body_cell));
        let href = link
            .and_then(|a| a.value().attr("href"))
            .unwrap_or_default()
            .to_string();
        let source = body_cell
            .select(&source_sel)
            .next()
            .map(text_of)
            .unwrap_or_default();
        items.push(
            Labeled::new()
                .with("Date", date)
                .with("Title", title)
                .with("Source", source)
                .with("Link", href),
        );
    }
    Ok(items)
}

/// The first row of the insider table names the fields of every later row.
fn read_insider(block: ElementRef<'_>) -> Result<Vec<Labeled>, ScreenError> {
    let row_sel = selector("table.insider-table tr")?;
    let head_sel = selector("td, th")?;

    let mut rows = block.select(&row_sel);
    let Some(head) = rows.next() else {
        return Ok(Vec::new());
    };
    let fields: Vec<String> = head.select(&head_sel).map(text_of).collect();

    let mut items = Vec::new();
    for tr in rows {
        let tds = cells(tr)?;
        if tds.is_empty() {
            continue;
        }
        if tds.len() != fields.len() {
            return Err(ScreenError::data(format!(
                "insider row has {} cells, expected {}",
                tds.len(),
                fields.len()
            )));
        }
        let mut item = Labeled::new();
        for (field, td) in fields.iter().zip(tds) {
            item.push(field.clone(), text_of(td));
        }
        items.push(item);
    }
    Ok(items)
}
