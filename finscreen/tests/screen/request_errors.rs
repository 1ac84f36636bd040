use finscreen::{
    ChartStyle, Filter, FilterCategory, ScreenError, ScreenRequest, Signal, Sort, Timeframe,
    ViewVariant,
};

use crate::helpers::{builder, dynamic_screener};

#[tokio::test]
async fn unknown_sort_field_fails_before_io() {
    let (screener, controller) = dynamic_screener(3);
    let req = ScreenRequest::new(ViewVariant::Overview).sort(Sort::descending("Vibes"));

    let err = screener.screen(&req).await.expect_err("bad sort");
    assert_eq!(
        err,
        ScreenError::UnknownSortField {
            field: "Vibes".into()
        }
    );
    assert!(controller.requests().await.is_empty());
}

#[tokio::test]
async fn technical_chart_needs_daily_timeframe() {
    let (screener, controller) = dynamic_screener(3);
    let req = ScreenRequest::new(ViewVariant::Charts)
        .chart(ChartStyle::Technical, Timeframe::Weekly);

    let err = screener.screen(&req).await.expect_err("bad chart");
    assert!(matches!(err, ScreenError::InvalidChartStyle { .. }));
    assert!(err.is_request_error());
    assert!(controller.requests().await.is_empty());
}

#[tokio::test]
async fn chart_extras_are_ignored_outside_chart_views() {
    let (screener, controller) = dynamic_screener(1);
    let req = ScreenRequest::new(ViewVariant::Overview)
        .chart(ChartStyle::Technical, Timeframe::Monthly);

    // no page scripted: the request is built and sent, then answered 404
    let err = screener.screen(&req).await.expect_err("unscripted");
    assert!(matches!(err.root_cause(), ScreenError::HttpStatus { status: 404, .. }));
    assert_eq!(
        controller.requests().await,
        vec!["https://finviz.com/screener.ashx?v=111".to_string()]
    );
}

#[tokio::test]
async fn unknown_custom_column_fails_before_io() {
    let (screener, controller) = dynamic_screener(3);
    let req = ScreenRequest::new(ViewVariant::Custom).columns([1, 9_999]);

    let err = screener.screen(&req).await.expect_err("bad column");
    assert!(matches!(err, ScreenError::InvalidArg(_)));
    assert!(controller.requests().await.is_empty());
}

#[tokio::test]
async fn blank_ticker_fails_before_io() {
    let (screener, controller) = dynamic_screener(3);
    let req = ScreenRequest::new(ViewVariant::Overview).tickers(["AAPL", "  "]);

    let err = screener.screen(&req).await.expect_err("blank ticker");
    assert!(matches!(err, ScreenError::InvalidArg(_)));
    assert!(controller.requests().await.is_empty());

    let err = screener.quote("").await.expect_err("blank quote ticker");
    assert!(matches!(err, ScreenError::InvalidArg(_)));
    assert!(controller.requests().await.is_empty());
}

#[tokio::test]
async fn malformed_base_url_fails_before_io() {
    let (transport, controller) = finscreen_mock::DynamicMockTransport::new_with_controller();
    let screener = builder(transport)
        .base_url("not a url")
        .build()
        .expect("screener");

    let err = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect_err("bad base");
    assert!(matches!(err, ScreenError::InvalidUrl { .. }));
    assert!(controller.requests().await.is_empty());
}

#[test]
fn empty_filter_cannot_be_built() {
    let err = Filter::new(FilterCategory::Exchange, Vec::<String>::new()).expect_err("empty");
    assert!(matches!(err, ScreenError::EmptyFilter { .. }));
}

#[tokio::test]
async fn full_request_reaches_the_transport_verbatim() {
    let (screener, controller) = dynamic_screener(1);
    let req = ScreenRequest::new(ViewVariant::Valuation)
        .signal(Signal::TopGainers)
        .filter(Filter::new(FilterCategory::Exchange, ["nasd", "nyse"]).expect("filter"))
        .tickers(["aapl", "msft"])
        .sort(Sort::descending("Price"));

    let _ = screener.screen(&req).await;
    assert_eq!(
        controller.requests().await,
        vec![
            "https://finviz.com/screener.ashx?v=121&s=ta_topgainers&f=exch_nasd%7Cnyse&t=AAPL%2CMSFT&o=-price"
                .to_string()
        ]
    );
}
