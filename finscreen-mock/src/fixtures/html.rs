//! Builders for screener and quote page markup.

use std::fmt::Write as _;

use finscreen_core::{ColumnType, classify};

use super::companies::Company;

/// Escape text for use inside element content or a double-quoted attribute.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

fn document(content: &str, page_count: usize) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Stock Screener</title></head><body>\n{content}\n{}</body></html>",
        page_selector(page_count)
    )
}

/// Page selector with one option per page; empty for a single page.
#[must_use]
pub fn page_selector(page_count: usize) -> String {
    if page_count <= 1 {
        return String::new();
    }
    let mut out = String::from("<select id=\"pageSelect\">");
    for p in 1..=page_count {
        let _ = write!(out, "<option value=\"{p}\">Page {p}/{page_count}</option>");
    }
    out.push_str("</select>\n");
    out
}

/// Display value a fixed-view cell shows for `header`.
///
/// Company fields come from the fixture; every other column gets a
/// deterministic value that parses as the column's declared type.
#[must_use]
pub fn cell_value(header: &str, company: &Company, no: usize) -> String {
    match header {
        "No." => no.to_string(),
        "Ticker" => company.ticker.clone(),
        "Company" => company.company.clone(),
        "Sector" => company.sector.clone(),
        "Industry" => company.industry.clone(),
        "Country" => company.country.clone(),
        "Market Cap" => company.market_cap.clone(),
        "P/E" => company.pe.clone(),
        "Price" => company.price.clone(),
        "Change" => company.change.clone(),
        "Volume" => company.volume.clone(),
        "Earnings" => "Apr 25/a".to_string(),
        "IPO Date" => "12/12/1980".to_string(),
        other => match classify::lookup(other) {
            Some(ColumnType::Integer) => format!("{},{:03}", no, no * 7 % 1_000),
            Some(ColumnType::LargeInteger) => format!("{}.{}M", 10 + no, no % 10),
            Some(ColumnType::Float) => format!("{}.{:02}", 1 + no % 9, no % 100),
            Some(ColumnType::Percentage) => format!("{}.{:02}%", no % 20, no * 3 % 100),
            Some(ColumnType::String) | None => "-".to_string(),
        },
    }
}

/// Fixed-column page from explicit cell text.
#[must_use]
pub fn fixed_page_raw(headers: &[String], rows: &[Vec<String>], page_count: usize) -> String {
    let mut out = String::from("<table class=\"screener_table\">\n<tr class=\"header\">");
    for h in headers {
        let _ = write!(out, "<td>{}</td>", escape(h));
    }
    out.push_str("</tr>\n");
    for row in rows {
        out.push_str("<tr class=\"styled-row\">");
        for cell in row {
            let _ = write!(out, "<td><a class=\"screener-link\">{}</a></td>", escape(cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>");
    document(&out, page_count)
}

/// Fixed-column page for `companies`, numbered from `first_no`.
#[must_use]
pub fn fixed_page(
    headers: &[String],
    companies: &[Company],
    first_no: usize,
    page_count: usize,
) -> String {
    let rows: Vec<Vec<String>> = companies
        .iter()
        .enumerate()
        .map(|(i, c)| {
            headers
                .iter()
                .map(|h| cell_value(h, c, first_no + i))
                .collect()
        })
        .collect();
    fixed_page_raw(headers, &rows, page_count)
}

/// Raw tooltip value, `body=[<b>TICKER</b><br>Company | Industry | Country | Cap]`.
#[must_use]
pub fn tooltip(company: &Company) -> String {
    format!(
        "body=[<b>{}</b><br>{} | {} | {} | {}]",
        company.ticker, company.company, company.industry, company.country, company.market_cap
    )
}

/// Charts view: one thumbnail link per company.
#[must_use]
pub fn chart_page(companies: &[Company], page_count: usize) -> String {
    let mut out = String::from("<div class=\"screener-charts\">\n");
    for c in companies {
        let _ = writeln!(
            out,
            "<a href=\"quote.ashx?t={t}\" data-boxover=\"{tip}\"><img src=\"chart.ashx?t={t}\" alt=\"{t}\"></a>",
            t = escape(&c.ticker),
            tip = escape(&tooltip(c)),
        );
    }
    out.push_str("</div>");
    document(&out, page_count)
}

/// Tickers view: a flat list of tooltip-carrying ticker links.
#[must_use]
pub fn tickers_page(companies: &[Company], page_count: usize) -> String {
    let mut out = String::from("<div class=\"screener-tickers\">\n");
    for c in companies {
        let _ = writeln!(
            out,
            "<span><a href=\"quote.ashx?t={t}\" data-boxover=\"{tip}\">{t}</a></span>",
            t = escape(&c.ticker),
            tip = escape(&tooltip(c)),
        );
    }
    out.push_str("</div>");
    document(&out, page_count)
}

/// Lay ranked companies out column-major: company `k` goes to column
/// `k % columns`, so reading row by row restores the ranking.
#[must_use]
pub fn bulk_columns(companies: &[Company], columns: usize) -> Vec<Vec<Company>> {
    let columns = columns.max(1);
    let mut out = vec![Vec::new(); columns.min(companies.len())];
    for (k, c) in companies.iter().enumerate() {
        out[k % columns].push(c.clone());
    }
    out
}

/// Bulk grid; `full` adds price and change spans to each entry.
#[must_use]
pub fn bulk_page(columns: &[Vec<Company>], full: bool, page_count: usize) -> String {
    let mut out = String::from("<table class=\"bulk-grid\"><tr>\n");
    for column in columns {
        out.push_str("<td class=\"bulk-column\">");
        for c in column {
            let _ = write!(
                out,
                "<div class=\"bulk-entry\"><a data-boxover=\"{}\">{}</a>",
                escape(&tooltip(c)),
                escape(&c.ticker)
            );
            if full {
                let _ = write!(
                    out,
                    "<span class=\"bulk-price\">{}</span><span class=\"bulk-change\">{}</span>",
                    escape(&c.price),
                    escape(&c.change)
                );
            }
            out.push_str("</div>");
        }
        out.push_str("</td>\n");
    }
    out.push_str("</tr></table>");
    document(&out, page_count)
}

/// Snapshot block with explicit label/value pairs.
#[must_use]
pub fn snapshot_block_with(company: &Company, pairs: &[(&str, &str)]) -> String {
    let mut out = format!(
        "<div class=\"snapshot-block\"><div class=\"fullview-title\">\
         <a class=\"fullview-ticker\" href=\"quote.ashx?t={t}\">{t}</a>\
         <span class=\"fullview-company\">{}</span>\
         <div class=\"fullview-links\"><a>{}</a> | <a>{}</a> | <a>{}</a></div></div>\
         <table class=\"snapshot-table2\">",
        escape(&company.company),
        escape(&company.sector),
        escape(&company.industry),
        escape(&company.country),
        t = escape(&company.ticker),
    );
    for pair_row in pairs.chunks(2) {
        out.push_str("<tr>");
        for (label, value) in pair_row {
            let _ = write!(
                out,
                "<td class=\"snapshot-td2-cp\">{}</td><td class=\"snapshot-td2\"><b>{}</b></td>",
                escape(label),
                escape(value)
            );
        }
        out.push_str("</tr>");
    }
    out.push_str("</table></div>\n");
    out
}

/// Snapshot block with the standard label set.
#[must_use]
pub fn snapshot_block(company: &Company) -> String {
    snapshot_block_with(
        company,
        &[
            ("Index", "S&P 500"),
            ("P/E", company.pe.as_str()),
            ("Market Cap", company.market_cap.as_str()),
            ("Price", company.price.as_str()),
            ("Change", company.change.as_str()),
            ("Volume", company.volume.as_str()),
            ("Employees", "161000"),
            ("Dividend %", "0.52%"),
            ("52W Range", "164.08 - 199.62"),
            ("RSI (14)", "58.21"),
            ("Optionable", "Yes"),
            ("Shortable", "Yes"),
        ],
    )
}

/// News item: `(stamp, title, source, link)`. A stamp holding only a time
/// shares the date of the row above.
pub type NewsItem<'a> = (&'a str, &'a str, &'a str, &'a str);

/// News satellite block.
#[must_use]
pub fn news_block(items: &[NewsItem<'_>]) -> String {
    let mut out = String::from("<div class=\"news-block\"><table class=\"fullview-news-outer\">");
    for (stamp, title, source, link) in items {
        let _ = write!(
            out,
            "<tr><td width=\"130\">{}</td><td><a class=\"tab-link-news\" href=\"{}\">{}</a> \
             <span class=\"news-source\">{}</span></td></tr>",
            escape(stamp),
            escape(link),
            escape(title),
            escape(source)
        );
    }
    out.push_str("</table></div>\n");
    out
}

/// Ratings satellite block; each row is Date, Action, Analyst, Rating, Price Target.
#[must_use]
pub fn ratings_block(rows: &[[&str; 5]]) -> String {
    let mut out =
        String::from("<div class=\"ratings-block\"><table class=\"fullview-ratings-outer\">");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</table></div>\n");
    out
}

/// Description satellite block.
#[must_use]
pub fn profile_block(text: &str) -> String {
    format!(
        "<div class=\"profile-block\"><table><tr><td class=\"fullview-profile\">{}</td></tr></table></div>\n",
        escape(text)
    )
}

/// Insider-trading satellite block; the first row names the fields.
#[must_use]
pub fn insider_block(fields: &[&str], rows: &[Vec<&str>]) -> String {
    let mut out = String::from("<div class=\"insider-block\"><table class=\"insider-table\"><tr>");
    for f in fields {
        let _ = write!(out, "<td>{}</td>", escape(f));
    }
    out.push_str("</tr>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</table></div>\n");
    out
}

/// Standard satellite blocks for `company`, in quote-page order.
#[must_use]
pub fn satellite_blocks(company: &Company) -> [String; 4] {
    let t = company.ticker.as_str();
    let news_link = format!("https://news.example.com/{t}/1");
    let news_link2 = format!("https://news.example.com/{t}/2");
    let news_title = format!("{} shares move on guidance", company.company);
    [
        ratings_block(&[
            ["Mar-01-24", "Upgrade", "North Desk", "Hold → Buy", "$210"],
            ["Feb-12-24", "Reiterated", "South Desk", "Neutral", "$185 → $190"],
        ]),
        news_block(&[
            ("Mar-05-24 09:30AM", news_title.as_str(), "Market Wire", news_link.as_str()),
            ("08:15AM", "Sector roundup", "Daily Brief", news_link2.as_str()),
        ]),
        profile_block(&format!(
            "{} operates in the {} industry.",
            company.company, company.industry
        )),
        insider_block(
            &["Insider", "Relationship", "Date", "Transaction", "Cost", "#Shares"],
            &[vec!["Doe Jane", "Director", "Feb 28", "Sale", "182.40", "10,000"]],
        ),
    ]
}

/// Screener page of composite blocks.
#[must_use]
pub fn composite_page(blocks: &[String], page_count: usize) -> String {
    document(
        &format!("<div class=\"screener-blocks\">\n{}</div>", blocks.concat()),
        page_count,
    )
}

/// Single-ticker quote page.
#[must_use]
pub fn quote_page(blocks: &[String]) -> String {
    document(
        &format!("<div class=\"quote-blocks\">\n{}</div>", blocks.concat()),
        1,
    )
}

/// Quote page with the snapshot and every satellite for `company`.
#[must_use]
pub fn full_quote_page(company: &Company) -> String {
    let mut blocks = vec![snapshot_block(company)];
    blocks.extend(satellite_blocks(company));
    quote_page(&blocks)
}
