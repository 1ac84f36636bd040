use finscreen::{
    ChartStyle, ColumnType, ScreenRequest, Timeframe, ViewLayout, ViewVariant, column_type,
};
use finscreen_mock::UNIVERSE_SIZE;

use crate::helpers::{ranked_tickers, static_screener};

fn request(view: ViewVariant) -> ScreenRequest {
    let req = ScreenRequest::new(view);
    if view.layout() == ViewLayout::Chart {
        req.chart(ChartStyle::Line, Timeframe::Weekly)
    } else {
        req
    }
}

#[tokio::test]
async fn every_view_screens_the_whole_universe() {
    let screener = static_screener();
    for view in ViewVariant::ALL {
        let table = screener
            .screen(&request(view))
            .await
            .unwrap_or_else(|e| panic!("{view}: {e}"));

        assert_eq!(table.len(), UNIVERSE_SIZE, "{view}");
        assert!(
            table.rows().iter().all(|r| r.len() == table.headers().len()),
            "{view}: ragged table"
        );
        let tickers: Vec<String> = table
            .column("Ticker")
            .unwrap_or_else(|| panic!("{view}: no ticker column"))
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(tickers, ranked_tickers(UNIVERSE_SIZE), "{view}: ranking order");
    }
}

#[tokio::test]
async fn every_view_header_classifies_and_cells_fit_their_type() {
    let screener = static_screener();
    for view in ViewVariant::ALL {
        let table = screener.screen(&request(view)).await.expect("screen");
        let types = table
            .column_types()
            .unwrap_or_else(|e| panic!("{view}: {e}"));
        for (header, ty) in table.headers().iter().zip(types) {
            for cell in table.column(header).expect("column") {
                assert!(
                    ty.accepts(cell),
                    "{view}: {header} ({ty}) does not accept {cell:?}"
                );
            }
        }
    }
}

#[tokio::test]
async fn fixed_views_keep_static_header_order() {
    let screener = static_screener();
    for view in ViewVariant::ALL
        .into_iter()
        .filter(|v| v.layout() == ViewLayout::Fixed && *v != ViewVariant::Custom)
    {
        let table = screener.screen(&request(view)).await.expect("screen");
        let expected = view.static_headers().expect("static headers");
        assert_eq!(table.headers(), expected, "{view}");
    }
}

#[tokio::test]
async fn custom_view_uses_selected_columns() {
    let screener = static_screener();
    let req = ScreenRequest::new(ViewVariant::Custom).columns([1, 2, 7, 65, 66]);
    let table = screener.screen(&req).await.expect("screen");

    assert_eq!(table.headers(), ["Ticker", "Company", "P/E", "Price", "Change"]);
    assert_eq!(table.cell(0, "Company"), Some("Apple Inc."));
    assert_eq!(table.cell(10, "Change"), Some("-"));
    assert_eq!(column_type("P/E"), Ok(ColumnType::Float));
}

#[tokio::test]
async fn bulk_grid_reads_back_in_ranking_order() {
    let screener = static_screener();
    let table = screener
        .screen(&ScreenRequest::new(ViewVariant::BulkFull))
        .await
        .expect("screen");

    assert_eq!(
        table.headers(),
        ["Ticker", "Company", "Industry", "Country", "Market Cap", "Price", "Change"]
    );
    assert_eq!(table.cell(0, "Price"), Some("189.30"));
    assert_eq!(table.cell(11, "Country"), Some("Japan"));
    assert_eq!(table.cell(44, "Ticker"), Some("SYN044"));
}

#[tokio::test]
async fn ticker_subset_is_passed_through() {
    let screener = static_screener();
    let req = ScreenRequest::new(ViewVariant::Tickers).tickers(["ko", "tm", "AAPL"]);
    let table = screener.screen(&req).await.expect("screen");

    // ranking order, not request order
    assert_eq!(table.column("Ticker").expect("ticker"), ["AAPL", "KO", "TM"]);
    assert_eq!(table.cell(2, "Market Cap"), Some("337.70B"));
}
