use std::time::Duration;

use finscreen::{HttpResponse, ScreenError, ScreenRequest, ViewVariant};
use finscreen_mock::{MockBehavior, MockRoute};

use crate::helpers::{
    dynamic_screener, dynamic_screener_with, offset_of, overview_page, ranked_tickers,
};

const PER_PAGE: usize = 3;

async fn script_pages(controller: &finscreen_mock::DynamicMockController, pages: usize) {
    controller
        .set(MockRoute::FirstPage, MockBehavior::ok(overview_page(1, PER_PAGE, pages)))
        .await;
    for page in 2..=pages {
        controller
            .set(
                MockRoute::Offset(offset_of(page, PER_PAGE)),
                MockBehavior::ok(overview_page(page, PER_PAGE, pages)),
            )
            .await;
    }
}

#[tokio::test(start_paused = true)]
async fn pages_merge_in_page_order_despite_completion_order() {
    let (screener, controller) = dynamic_screener(1);
    let pages = 5;
    controller
        .set(MockRoute::FirstPage, MockBehavior::ok(overview_page(1, PER_PAGE, pages)))
        .await;
    // later pages finish first
    for page in 2..=pages {
        let delay = Duration::from_millis(100 * (pages - page + 1) as u64);
        controller
            .set(
                MockRoute::Offset(offset_of(page, PER_PAGE)),
                MockBehavior::delayed(delay, overview_page(page, PER_PAGE, pages)),
            )
            .await;
    }

    let table = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect("screen");

    assert_eq!(table.len(), pages * PER_PAGE);
    let tickers: Vec<String> = table
        .column("Ticker")
        .expect("ticker column")
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(tickers, ranked_tickers(pages * PER_PAGE));
    let numbers = table.column("No.").expect("no. column");
    assert_eq!(numbers.first(), Some(&"1"));
    assert_eq!(numbers.last(), Some(&"15"));
}

#[tokio::test]
async fn offsets_follow_first_page_row_count() {
    let (screener, controller) = dynamic_screener(1);
    script_pages(&controller, 3).await;

    screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect("screen");

    let mut requests = controller.requests().await;
    requests.sort();
    assert_eq!(
        requests,
        vec![
            "https://finviz.com/screener.ashx?v=111".to_string(),
            "https://finviz.com/screener.ashx?v=111&r=4".to_string(),
            "https://finviz.com/screener.ashx?v=111&r=7".to_string(),
        ]
    );
}

#[tokio::test]
async fn failing_page_aborts_with_its_page_number() {
    let (screener, controller) =
        dynamic_screener_with(|b| b.max_attempts(2).max_concurrent_pages(1));
    script_pages(&controller, 5).await;
    controller
        .set(MockRoute::Offset(offset_of(3, PER_PAGE)), MockBehavior::status(500, "boom"))
        .await;

    let err = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect_err("page 3 fails");

    let ScreenError::Page { page, source } = &err else {
        panic!("expected page error, got {err:?}");
    };
    assert_eq!(*page, 3);
    assert!(matches!(**source, ScreenError::HttpStatus { status: 500, .. }));
    // both attempts at page 3, nothing after it
    assert_eq!(controller.hits(&MockRoute::Offset(offset_of(3, PER_PAGE))).await, 2);
    assert_eq!(controller.hits(&MockRoute::Offset(offset_of(4, PER_PAGE))).await, 0);
    assert_eq!(controller.hits(&MockRoute::Offset(offset_of(5, PER_PAGE))).await, 0);
}

#[tokio::test(start_paused = true)]
async fn late_failure_discards_pages_that_already_succeeded() {
    let (screener, controller) =
        dynamic_screener_with(|b| b.max_attempts(1).max_concurrent_pages(4));
    script_pages(&controller, 5).await;
    controller
        .set(
            MockRoute::Offset(offset_of(3, PER_PAGE)),
            MockBehavior::Delayed(
                Duration::from_millis(500),
                HttpResponse::with_status(500, "boom"),
            ),
        )
        .await;

    let err = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect_err("page 3 fails after the others finished");

    let ScreenError::Page { page, source } = &err else {
        panic!("expected page error, got {err:?}");
    };
    assert_eq!(*page, 3);
    assert!(matches!(**source, ScreenError::HttpStatus { status: 500, .. }));
    for page in [2, 4, 5] {
        assert_eq!(
            controller.hits(&MockRoute::Offset(offset_of(page, PER_PAGE))).await,
            1,
            "page {page} was fetched"
        );
    }
}

#[tokio::test]
async fn first_page_failure_is_reported_as_page_one() {
    let (screener, controller) = dynamic_screener(1);
    controller
        .set(MockRoute::FirstPage, MockBehavior::status(404, "gone"))
        .await;

    let err = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect_err("page 1 fails");
    assert!(matches!(err, ScreenError::Page { page: 1, .. }));
    assert!(matches!(err.root_cause(), ScreenError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn single_page_result_fetches_once() {
    let (screener, controller) = dynamic_screener(1);
    controller
        .set(MockRoute::FirstPage, MockBehavior::ok(overview_page(1, 4, 1)))
        .await;

    let table = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect("screen");
    assert_eq!(table.len(), 4);
    assert_eq!(controller.requests().await.len(), 1);
}

#[tokio::test]
async fn empty_first_page_yields_empty_table() {
    let (screener, controller) = dynamic_screener(1);
    controller
        .set(
            MockRoute::FirstPage,
            MockBehavior::ok("<html><body><p>No results</p></body></html>"),
        )
        .await;

    let table = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect("screen");
    assert!(table.is_empty());
    assert_eq!(table.headers().len(), 11);
}

#[tokio::test(start_paused = true)]
async fn request_timeout_bounds_the_whole_screen() {
    let (screener, controller) =
        dynamic_screener_with(|b| b.request_timeout(Duration::from_secs(2)));
    controller
        .set(MockRoute::FirstPage, MockBehavior::ok(overview_page(1, PER_PAGE, 2)))
        .await;
    controller
        .set(MockRoute::Offset(offset_of(2, PER_PAGE)), MockBehavior::Hang)
        .await;

    let err = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect_err("timeout");
    assert_eq!(
        err,
        ScreenError::RequestTimeout {
            operation: "screen".into()
        }
    );
}

#[tokio::test]
async fn scrape_failure_on_later_page_is_not_retried() {
    let (screener, controller) = dynamic_screener(3);
    script_pages(&controller, 2).await;
    let broken = "<table class=\"screener_table\"><tr class=\"styled-row\"><td>only</td></tr></table>";
    controller
        .set(MockRoute::Offset(offset_of(2, PER_PAGE)), MockBehavior::ok(broken))
        .await;

    let err = screener
        .screen(&ScreenRequest::new(ViewVariant::Overview))
        .await
        .expect_err("ragged row");
    assert!(matches!(err, ScreenError::Page { page: 2, .. }));
    assert!(matches!(err.root_cause(), ScreenError::Data(_)));
    assert_eq!(controller.hits(&MockRoute::Offset(offset_of(2, PER_PAGE))).await, 1);
}
