use finscreen::{ScreenError, Satellite};
use finscreen_mock::fixtures;
use finscreen_mock::{MockBehavior, MockRoute};

use crate::helpers::{dynamic_screener, static_screener};

#[tokio::test]
async fn quote_returns_snapshot_and_every_satellite() {
    let screener = static_screener();
    let record = screener.quote("aapl").await.expect("quote");

    assert_eq!(record.get("Ticker"), Some("AAPL"));
    assert_eq!(record.get("Company"), Some("Apple Inc."));
    assert_eq!(record.get("P/E"), Some("29.50"));
    assert_eq!(record.get("52W Range"), Some("164.08 - 199.62"));
    for satellite in Satellite::ALL {
        let raw = record.get(satellite.header()).expect("satellite present");
        assert_ne!(raw, "-", "{}", satellite.header());
    }
    let insider: Vec<serde_json::Value> =
        serde_json::from_str(record.get("Insider Trading").expect("insider")).expect("json");
    assert_eq!(insider[0]["#Shares"], "10,000");
}

#[tokio::test(start_paused = true)]
async fn quotes_collects_successes_and_failures() {
    let screener = static_screener();
    let (records, failures) = screener.quotes(&["MSFT", "NOPE", "KO"][..]).await;

    let tickers: Vec<&str> = records.iter().filter_map(|r| r.get("Ticker")).collect();
    assert_eq!(tickers, ["MSFT", "KO"]);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "NOPE");
    assert!(matches!(
        failures[0].1.root_cause(),
        ScreenError::HttpStatus { status: 404, .. }
    ));
}

#[tokio::test(start_paused = true)]
async fn quote_surfaces_rate_limit_after_retries() {
    let screener = static_screener();
    let err = screener.quote("LIMIT").await.expect_err("limited");
    assert!(matches!(err, ScreenError::RateLimited { .. }));
}

#[tokio::test]
async fn quote_page_without_snapshot_is_data_error() {
    let (screener, controller) = dynamic_screener(1);
    controller
        .set(MockRoute::quote("AAPL"), MockBehavior::ok(fixtures::quote_page(&[])))
        .await;

    let err = screener.quote("AAPL").await.expect_err("no snapshot");
    assert!(matches!(err, ScreenError::Data(_)));
}

#[tokio::test]
async fn quote_requests_the_normalized_ticker() {
    let (screener, controller) = dynamic_screener(1);
    controller
        .set(
            MockRoute::quote("TM"),
            MockBehavior::ok(fixtures::full_quote_page(
                &fixtures::by_ticker("TM", 12).expect("fixture"),
            )),
        )
        .await;

    let record = screener.quote(" tm ").await.expect("quote");
    assert_eq!(record.get("Country"), Some("Japan"));
    assert_eq!(
        controller.requests().await,
        vec!["https://finviz.com/quote.ashx?t=TM".to_string()]
    );
}
