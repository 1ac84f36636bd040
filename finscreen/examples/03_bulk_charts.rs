mod common;
use common::{get_transport, init_tracing};
use finscreen::{ChartStyle, ScreenRequest, Screener, Timeframe, ViewVariant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let screener = Screener::builder().with_transport(get_transport()?).build()?;

    // Column-major grid, read back in ranking order.
    let bulk = screener
        .screen(&ScreenRequest::new(ViewVariant::BulkFull))
        .await?;
    for row in bulk.rows().iter().take(8) {
        println!("{}", row.join(" | "));
    }

    // Chart thumbnails only carry the tooltip fields.
    let req = ScreenRequest::new(ViewVariant::Charts).chart(ChartStyle::Line, Timeframe::Weekly);
    let charts = screener.screen(&req).await?;
    println!("{} charts, columns: {:?}", charts.len(), charts.headers());

    Ok(())
}
