//! `roic`: compare Return on Invested Capital across tickers.
//!
//! ```bash
//! roic "V, MSFT, GOOGL, AAPL" --years 5
//! roic aapl,msft --csv roic.csv
//! ROIC_USE_MOCK=1 roic NEGIC,PARTIAL
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use roic::{
    DEFAULT_TICKERS, DEFAULT_YEARS, MAX_YEARS, MIN_YEARS, Roic, RoicConnector, parse_tickers,
    render_table, write_csv,
};

/// Environment variable that forces the offline fixture connector.
const USE_MOCK_ENV: &str = "ROIC_USE_MOCK";

#[derive(Parser)]
#[command(name = "roic", version)]
#[command(about = "Compute ROIC per fiscal year for a list of tickers")]
struct Cli {
    /// Comma-separated list of tickers
    #[arg(default_value = DEFAULT_TICKERS)]
    tickers: String,

    /// Number of fiscal years to show
    #[arg(
        long,
        default_value_t = DEFAULT_YEARS as u8,
        value_parser = clap::value_parser!(u8).range(MIN_YEARS as i64..=MAX_YEARS as i64),
    )]
    years: u8,

    /// Also write the table as CSV to this path
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Use built-in fixture data instead of Yahoo Finance
    #[arg(long)]
    mock: bool,
}

/// `1`, `true`, `yes` and `on` (any case) enable a flag; anything else leaves it off.
fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn connector(use_mock: bool) -> Result<Arc<dyn RoicConnector>, roic::RoicError> {
    let env_mock = std::env::var(USE_MOCK_ENV).is_ok_and(|v| env_flag(&v));
    if use_mock || env_mock {
        return Ok(Arc::new(roic_mock::MockConnector::new()));
    }
    Ok(roic_yfinance::YfConnector::cached()?.build())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=roic=debug for provider details; warnings by default.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();
    let tickers = parse_tickers(&cli.tickers);
    if tickers.is_empty() {
        return Err("no tickers given".into());
    }

    let roic = Roic::builder().with_connector(connector(cli.mock)?).build()?;
    let cmp = roic.compare(&tickers, usize::from(cli.years)).await;

    for report in &cmp.reports {
        if let Some(e) = &report.error {
            eprintln!("{}: {e}", report.series.symbol);
        } else if report.is_no_data() {
            eprintln!("{}: no usable ROIC in the requested years", report.series.symbol);
        }
    }

    if cmp.is_empty() {
        println!("No ROIC data found for the requested tickers.");
        return Ok(());
    }

    print!("{}", render_table(&cmp.table));

    if let Some(path) = cli.csv {
        let file = std::fs::File::create(&path)?;
        write_csv(&cmp.table, file)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::env_flag;

    #[test]
    fn mock_env_values() {
        for on in ["1", "true", "YES", " on "] {
            assert!(env_flag(on), "{on:?}");
        }
        for off in ["0", "false", "no", "off", ""] {
            assert!(!env_flag(off), "{off:?}");
        }
    }
}
