mod common;
use common::{get_transport, init_tracing};
use finscreen::{Filter, FilterCategory, ScreenRequest, Screener, Signal, Sort, ViewVariant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 1. Build the screener (mock in CI when FINSCREEN_EXAMPLES_USE_MOCK is set).
    let screener = Screener::builder()
        .with_transport(get_transport()?)
        .max_concurrent_pages(4)
        .build()?;

    // 2. Describe the screen: top gainers on NASDAQ or NYSE, priciest first.
    let req = ScreenRequest::new(ViewVariant::Overview)
        .signal(Signal::TopGainers)
        .filter(Filter::new(FilterCategory::Exchange, ["nasd", "nyse"])?)
        .sort(Sort::descending("Price"));

    // 3. Fetch every page and merge.
    let table = screener.screen(&req).await?;
    println!("{} rows", table.len());

    // 4. Print the header with each column's semantic type, then a few rows.
    let types = table.column_types()?;
    let header: Vec<String> = table
        .headers()
        .iter()
        .zip(types)
        .map(|(h, t)| format!("{h} ({t})"))
        .collect();
    println!("{}", header.join(" | "));
    for row in table.rows().iter().take(5) {
        println!("{}", row.join(" | "));
    }

    Ok(())
}
