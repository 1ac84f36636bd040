use finscreen::{ScreenRequest, ViewVariant};
use finscreen_mock::fixtures::{self, Company};
use finscreen_mock::{MockBehavior, MockRoute};

use crate::helpers::{dynamic_screener, page_companies, static_screener};

fn blocks(company: &Company, with_profile: bool) -> Vec<String> {
    let [_, news, profile, _] = fixtures::satellite_blocks(company);
    let mut out = vec![fixtures::snapshot_block(company), news];
    if with_profile {
        out.push(profile);
    }
    out
}

#[tokio::test]
async fn satellite_lists_render_as_json() {
    let screener = static_screener();
    let table = screener
        .screen(&ScreenRequest::new(ViewVariant::News))
        .await
        .expect("screen");

    let raw = table.cell(0, "News").expect("news cell");
    let items: Vec<serde_json::Value> = serde_json::from_str(raw).expect("json list");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["Date"], "Mar-05-24 09:30AM");
    assert_eq!(items[1]["Date"], "Mar-05-24 08:15AM");
    assert_eq!(items[1]["Link"], "https://news.example.com/AAPL/2");
    assert!(table.column_index("Ratings").is_none());
}

#[tokio::test]
async fn ta_view_carries_only_ratings() {
    let screener = static_screener();
    let table = screener
        .screen(&ScreenRequest::new(ViewVariant::Ta))
        .await
        .expect("screen");

    assert_eq!(table.headers().last().map(String::as_str), Some("Ratings"));
    for other in ["News", "Description", "Insider Trading"] {
        assert!(table.column_index(other).is_none(), "{other}");
    }
    let ratings: Vec<serde_json::Value> =
        serde_json::from_str(table.cell(3, "Ratings").expect("ratings")).expect("json");
    assert_eq!(ratings[0]["Price Target"], "$210");
}

#[tokio::test]
async fn missing_satellite_renders_placeholder() {
    let (screener, controller) = dynamic_screener(1);
    let companies = page_companies(1, 3);
    let mut page = blocks(&companies[0], true);
    page.extend(blocks(&companies[1], false));
    page.extend(blocks(&companies[2], true));
    controller
        .set(MockRoute::FirstPage, MockBehavior::ok(fixtures::composite_page(&page, 1)))
        .await;

    let table = screener
        .screen(&ScreenRequest::new(ViewVariant::Basic))
        .await
        .expect("screen");

    assert_eq!(table.len(), 3);
    assert_eq!(table.cell(1, "Description"), Some("-"));
    assert_eq!(
        table.cell(2, "Description"),
        Some("NVIDIA Corporation operates in the Semiconductors industry.")
    );
    // no insider block anywhere: no column either
    assert!(table.column_index("Insider Trading").is_none());
}

#[tokio::test]
async fn headers_first_seen_on_later_pages_are_appended() {
    let (screener, controller) = dynamic_screener(1);
    let first: Vec<String> = page_companies(1, 2)
        .iter()
        .flat_map(|c| blocks(c, false))
        .collect();
    let second: Vec<String> = page_companies(2, 2)
        .iter()
        .flat_map(|c| blocks(c, true))
        .collect();
    controller
        .set(MockRoute::FirstPage, MockBehavior::ok(fixtures::composite_page(&first, 2)))
        .await;
    controller
        .set(MockRoute::Offset(3), MockBehavior::ok(fixtures::composite_page(&second, 2)))
        .await;

    let req = ScreenRequest::new(ViewVariant::Basic);
    let table = screener.screen(&req).await.expect("screen");

    let page_one_only = {
        let (solo, solo_ctl) = dynamic_screener(1);
        solo_ctl
            .set(MockRoute::FirstPage, MockBehavior::ok(fixtures::composite_page(&first, 1)))
            .await;
        solo.screen(&req).await.expect("solo")
    };
    let n = page_one_only.headers().len();
    assert_eq!(&table.headers()[..n], page_one_only.headers());
    assert_eq!(table.headers().last().map(String::as_str), Some("Description"));
    assert_eq!(table.cell(0, "Description"), Some("-"));
    assert_eq!(table.len(), 4);
}
