use finscreen::{RATE_LIMIT_SENTINEL, ScreenError, ScreenRequest, ViewVariant};
use finscreen_mock::{MockBehavior, MockRoute};

use crate::helpers::{dynamic_screener, dynamic_screener_with, overview_page};

#[tokio::test(start_paused = true)]
async fn sentinel_is_retried_until_success() {
    let (screener, controller) = dynamic_screener(4);
    controller
        .script(
            MockRoute::FirstPage,
            vec![
                MockBehavior::rate_limited(),
                MockBehavior::rate_limited(),
                MockBehavior::rate_limited(),
                MockBehavior::ok(overview_page(1, 5, 1)),
            ],
        )
        .await;

    let table = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect("fourth attempt succeeds");
    assert_eq!(table.len(), 5);
    assert_eq!(controller.hits(&MockRoute::FirstPage).await, 4);
}

#[tokio::test(start_paused = true)]
async fn retried_result_matches_clean_result() {
    let (clean, clean_ctl) = dynamic_screener(1);
    clean_ctl
        .set(MockRoute::FirstPage, MockBehavior::ok(overview_page(1, 5, 1)))
        .await;
    let (flaky, flaky_ctl) = dynamic_screener(3);
    flaky_ctl
        .script(
            MockRoute::FirstPage,
            vec![
                MockBehavior::status(503, "busy"),
                MockBehavior::rate_limited(),
                MockBehavior::ok(overview_page(1, 5, 1)),
            ],
        )
        .await;

    let req = ScreenRequest::new(ViewVariant::Overview);
    let a = clean.screen(&req).await.expect("clean");
    let b = flaky.screen(&req).await.expect("flaky");
    assert_eq!(a, b);
}

#[tokio::test(start_paused = true)]
async fn exhausted_budget_returns_last_error() {
    let (screener, controller) = dynamic_screener(3);
    controller
        .script(
            MockRoute::FirstPage,
            vec![MockBehavior::status(503, "busy"), MockBehavior::rate_limited()],
        )
        .await;

    let err = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect_err("budget exhausted");
    assert!(matches!(err.root_cause(), ScreenError::RateLimited { .. }));
    assert_eq!(controller.hits(&MockRoute::FirstPage).await, 3);
}

#[tokio::test(start_paused = true)]
async fn sentinel_match_is_exact() {
    let (screener, controller) = dynamic_screener(3);
    controller
        .set(
            MockRoute::FirstPage,
            MockBehavior::ok(format!("\n  {RATE_LIMIT_SENTINEL}\n")),
        )
        .await;

    let result = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await;
    if let Err(err) = &result {
        assert!(
            !matches!(err.root_cause(), ScreenError::RateLimited { .. }),
            "padded body is not the sentinel: {err}"
        );
    }
    assert_eq!(controller.hits(&MockRoute::FirstPage).await, 1);
}

#[tokio::test]
async fn extra_sentinels_are_detected() {
    let (screener, controller) =
        dynamic_screener_with(|b| b.max_attempts(1).rate_limit_sentinel("Slow down"));
    controller
        .set(MockRoute::FirstPage, MockBehavior::ok("Slow down"))
        .await;

    let err = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect_err("rate limited");
    assert!(matches!(err.root_cause(), ScreenError::RateLimited { .. }));
}

#[tokio::test]
async fn invalid_url_from_transport_is_not_retried() {
    let (screener, controller) = dynamic_screener(5);
    controller
        .set(
            MockRoute::FirstPage,
            MockBehavior::Fail(ScreenError::invalid_url("x", "bad")),
        )
        .await;

    let err = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect_err("permanent");
    assert!(matches!(err.root_cause(), ScreenError::InvalidUrl { .. }));
    assert_eq!(controller.hits(&MockRoute::FirstPage).await, 1);
}

#[tokio::test(start_paused = true)]
async fn transport_failures_are_retried() {
    let (screener, controller) = dynamic_screener(2);
    controller
        .script(
            MockRoute::FirstPage,
            vec![
                MockBehavior::Fail(ScreenError::transport("x", "connection reset")),
                MockBehavior::ok(overview_page(1, 2, 1)),
            ],
        )
        .await;

    let table = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect("second attempt");
    assert_eq!(table.len(), 2);
}
