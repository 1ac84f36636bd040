mod common;
use common::{get_transport, init_tracing};
use finscreen::Screener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let screener = Screener::builder().with_transport(get_transport()?).build()?;

    // Single ticker: snapshot fields plus news, ratings, description and insider trades.
    let apple = screener.quote("AAPL").await?;
    for (header, value) in apple.iter().take(12) {
        println!("{header:>14}: {value}");
    }
    if let Some(news) = apple.get("News") {
        let items: Vec<serde_json::Value> = serde_json::from_str(news)?;
        println!("{} headlines", items.len());
    }

    // Several tickers: failures are reported per ticker, not for the batch.
    let (records, failures) = screener.quotes(&["MSFT", "KO", "NOPE"][..]).await;
    println!("{} quotes fetched", records.len());
    for (ticker, err) in failures {
        println!("{ticker}: {err}");
    }

    Ok(())
}
