//! Packed `data-boxover` tooltip grammar shared by the chart, ticker and bulk views.

use finscreen_core::{FieldValue, RawRecord, ScreenError, TOOLTIP_HEADERS};
use scraper::{ElementRef, Html};

use super::selector;

/// Attribute carrying the packed tooltip.
pub(crate) const TOOLTIP_ATTR: &str = "data-boxover";

/// Fields decoded from one tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// Ticker symbol.
    pub ticker: String,
    /// Company name; may itself contain `|`.
    pub company: String,
    /// Industry.
    pub industry: String,
    /// Country.
    pub country: String,
    /// Market capitalization as displayed.
    pub market_cap: String,
}

impl Tooltip {
    pub(crate) fn into_record(self) -> RawRecord {
        let mut rec = RawRecord::new();
        let values = [
            self.ticker,
            self.company,
            self.industry,
            self.country,
            self.market_cap,
        ];
        for (header, value) in TOOLTIP_HEADERS.iter().zip(values) {
            if value.is_empty() {
                rec.insert(*header, FieldValue::Absent);
            } else {
                rec.insert(*header, value);
            }
        }
        rec
    }
}

/// Decode `body=[<b>TICKER</b><br>Company | Industry | Country | Cap]`.
///
/// The trailer is split from the right so a company name containing `|`
/// stays intact.
///
/// # Errors
/// Returns `ScreenError::Data` naming the first missing delimiter.
pub fn parse_tooltip(raw: &str) -> Result<Tooltip, ScreenError> {
    let malformed = |what: &str| ScreenError::data(format!("malformed tooltip ({what}): {raw}"));

    let body = raw
        .trim()
        .strip_prefix("body=[")
        .ok_or_else(|| malformed("missing body=["))?;
    let body = body
        .strip_suffix(']')
        .ok_or_else(|| malformed("missing closing ]"))?;
    let (_, rest) = body.split_once("<b>").ok_or_else(|| malformed("missing <b>"))?;
    let (ticker, rest) = rest
        .split_once("</b>")
        .ok_or_else(|| malformed("missing </b>"))?;
    let (_, trailer) = rest
        .split_once("<br>")
        .ok_or_else(|| malformed("missing <br>"))?;

    let mut parts = trailer.rsplitn(4, '|').map(str::trim);
    let market_cap = parts.next().unwrap_or_default();
    let (Some(country), Some(industry), Some(company)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed("expected four |-separated fields"));
    };

    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(malformed("empty ticker"));
    }
    Ok(Tooltip {
        ticker: ticker.to_string(),
        company: company.to_string(),
        industry: industry.to_string(),
        country: country.to_string(),
        market_cap: market_cap.to_string(),
    })
}

pub(crate) fn tooltip_of(el: ElementRef<'_>) -> Result<Tooltip, ScreenError> {
    let raw = el
        .value()
        .attr(TOOLTIP_ATTR)
        .ok_or_else(|| ScreenError::data("entry without tooltip"))?;
    parse_tooltip(raw)
}

/// Every tooltip-carrying element in document order.
pub(super) fn scrape(doc: &Html) -> Result<(Vec<String>, Vec<RawRecord>), ScreenError> {
    let sel = selector("[data-boxover]")?;
    let rows = doc
        .select(&sel)
        .map(|el| tooltip_of(el).map(Tooltip::into_record))
        .collect::<Result<Vec<_>, _>>()?;
    let headers = TOOLTIP_HEADERS.iter().map(|h| (*h).to_string()).collect();
    Ok((headers, rows))
}
