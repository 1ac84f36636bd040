/// One fixture company with the fields every view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub ticker: String,
    pub company: String,
    pub sector: String,
    pub industry: String,
    pub country: String,
    pub market_cap: String,
    pub pe: String,
    pub price: String,
    pub change: String,
    pub volume: String,
}

#[allow(clippy::too_many_arguments)]
fn c(
    ticker: &str,
    company: &str,
    sector: &str,
    industry: &str,
    country: &str,
    market_cap: &str,
    pe: &str,
    price: &str,
    change: &str,
    volume: &str,
) -> Company {
    Company {
        ticker: ticker.to_string(),
        company: company.to_string(),
        sector: sector.to_string(),
        industry: industry.to_string(),
        country: country.to_string(),
        market_cap: market_cap.to_string(),
        pe: pe.to_string(),
        price: price.to_string(),
        change: change.to_string(),
        volume: volume.to_string(),
    }
}

/// Named fixture companies, in ranking order.
#[must_use]
pub fn named() -> Vec<Company> {
    vec![
        c("AAPL", "Apple Inc.", "Technology", "Consumer Electronics", "USA", "2.87T", "29.50", "189.30", "0.85%", "52,164,470"),
        c("MSFT", "Microsoft Corporation", "Technology", "Software - Infrastructure", "USA", "3.09T", "36.21", "415.50", "-0.12%", "18,532,105"),
        c("NVDA", "NVIDIA Corporation", "Technology", "Semiconductors", "USA", "2.21T", "71.40", "884.55", "3.10%", "45,221,900"),
        c("GOOGL", "Alphabet Inc.", "Communication Services", "Internet Content & Information", "USA", "1.71T", "25.33", "138.20", "-1.02%", "29,114,380"),
        c("AMZN", "Amazon.com, Inc.", "Consumer Cyclical", "Internet Retail", "USA", "1.83T", "60.12", "176.76", "0.44%", "37,882,510"),
        c("META", "Meta Platforms, Inc.", "Communication Services", "Internet Content & Information", "USA", "1.27T", "32.80", "499.10", "1.75%", "14,009,220"),
        c("TSLA", "Tesla, Inc.", "Consumer Cyclical", "Auto Manufacturers", "USA", "561.40B", "40.07", "175.34", "-3.92%", "101,567,300"),
        c("KO", "The Coca-Cola Company", "Consumer Defensive", "Beverages - Non-Alcoholic", "USA", "261.90B", "24.10", "60.61", "0.10%", "11,870,040"),
        c("PEP", "PepsiCo, Inc.", "Consumer Defensive", "Beverages - Non-Alcoholic", "USA", "236.80B", "25.74", "172.44", "-0.35%", "4,802,650"),
        c("JPM", "JPMorgan Chase & Co.", "Financial", "Banks - Diversified", "USA", "551.20B", "11.92", "191.87", "0.62%", "8,405,730"),
        c("XOM", "Exxon Mobil Corporation", "Energy", "Oil & Gas Integrated", "USA", "467.10B", "12.98", "117.40", "-", "17,655,020"),
        c("TM", "Toyota Motor Corporation", "Consumer Cyclical", "Auto Manufacturers", "Japan", "337.70B", "10.33", "247.90", "1.21%", "300,150"),
    ]
}

/// A deterministic universe of `n` companies: the named ones first, then
/// synthetic `SYNnnn` tickers.
#[must_use]
pub fn universe(n: usize) -> Vec<Company> {
    let mut out: Vec<Company> = named().into_iter().take(n).collect();
    for i in out.len()..n {
        out.push(synthetic(i));
    }
    out
}

/// Synthetic company number `i`.
#[must_use]
pub fn synthetic(i: usize) -> Company {
    let cents = 1_000 + (i * 137) % 9_000;
    Company {
        ticker: format!("SYN{i:03}"),
        company: format!("Synthetic Holdings {i}"),
        sector: "Industrials".to_string(),
        industry: "Specialty Industrial Machinery".to_string(),
        country: "USA".to_string(),
        market_cap: format!("{}.{}B", 1 + i % 90, i % 10),
        pe: format!("{}.{:02}", 8 + i % 30, i % 100),
        price: format!("{}.{:02}", cents / 100, cents % 100),
        change: format!("{}{}.{:02}%", if i % 3 == 0 { "-" } else { "" }, i % 4, (i * 7) % 100),
        volume: format!("{},{:03}", 100 + i, (i * 31) % 1_000),
    }
}

/// Look up a company of the default universe by ticker (case-insensitive).
#[must_use]
pub fn by_ticker(ticker: &str, universe_size: usize) -> Option<Company> {
    universe(universe_size)
        .into_iter()
        .find(|c| c.ticker.eq_ignore_ascii_case(ticker))
}
