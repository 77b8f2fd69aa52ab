mod common;
use common::get_connector;
use roic::{Roic, format_percent};

fn fmt_usd(v: Option<f64>) -> String {
    v.map_or_else(|| "<none>".to_string(), |x| format!("{:.1}B", x / 1e9))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let roic = Roic::builder().with_connector(get_connector()).build()?;
    let report = roic.compute_report("AAPL", 5).await;

    if let Some(e) = report.error {
        return Err(e.into());
    }

    println!("ROIC breakdown for {}", report.series.symbol);
    for p in &report.periods {
        println!(
            "FY{} ({}): nopat={} ic={} tax={} ({:?}) roic={}",
            p.fiscal_year,
            p.period_end,
            fmt_usd(p.nopat),
            fmt_usd(p.invested_capital),
            format_percent(p.tax_rate),
            p.tax_rate_source,
            format_percent(p.roic),
        );
    }
    for s in &report.skipped {
        println!("skipped {}: {:?}", s.period_end, s.kind);
    }
    Ok(())
}
