mod common;
use common::get_connector;
use roic::{DEFAULT_TICKERS, Roic, parse_tickers, render_table, to_csv_string};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let roic = Roic::builder().with_connector(get_connector()).build()?;

    let tickers = parse_tickers(DEFAULT_TICKERS);
    let cmp = roic.compare(&tickers, 5).await;

    for report in &cmp.reports {
        if let Some(e) = &report.error {
            println!("{}: {e}", report.series.symbol);
        }
    }

    if cmp.is_empty() {
        println!("No ROIC data found.");
        return Ok(());
    }
    print!("{}", render_table(&cmp.table));
    println!();
    print!("{}", to_csv_string(&cmp.table)?);
    Ok(())
}
