mod helpers;

use roic::{Roic, RoicError};

use crate::helpers::{approx, mock};

fn expected(ebit: f64, tax: f64, equity: f64, debt: f64, cash: f64) -> f64 {
    ebit * (1.0 - tax) / (equity + debt - cash)
}

#[tokio::test]
async fn aapl_series_matches_fixture_arithmetic() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let series = roic.compute("aapl", 5).await;

    assert_eq!(series.symbol, "AAPL");
    assert_eq!(series.years_desc().collect::<Vec<_>>(), [2024, 2023, 2022, 2021]);
    let v2024 = series.get(2024).flatten().unwrap();
    assert!(approx(
        v2024,
        expected(123_216.0, 0.241, 56_950.0, 106_629.0, 29_943.0)
    ));
}

#[tokio::test]
async fn years_limit_keeps_most_recent() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let series = roic.compute("MSFT", 2).await;
    assert_eq!(series.years_desc().collect::<Vec<_>>(), [2024, 2023]);
}

#[tokio::test]
async fn googl_uses_operating_income_and_derived_rate() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let report = roic.compute_report("GOOGL", 1).await;
    assert!(report.error.is_none());
    let p = &report.periods[0];
    assert_eq!(p.fiscal_year, 2024);
    assert_eq!(p.tax_rate_source, roic::TaxRateSource::Derived);
    assert!(approx(p.tax_rate.unwrap(), 0.164));
    assert!(approx(
        p.roic.unwrap(),
        expected(112_390.0, 0.164, 325_084.0, 25_461.0, 23_466.0)
    ));
}

#[tokio::test]
async fn msft_sums_debt_components() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let v = roic.compute("MSFT", 1).await.get(2024).flatten().unwrap();
    assert!(approx(v, expected(109_433.0, 0.182, 268_477.0, 67_127.0, 18_315.0)));
}

#[tokio::test]
async fn negative_invested_capital_is_missing_not_dropped() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let series = roic.compute("NEGIC", 5).await;
    assert_eq!(series.get(2024), Some(None));
    assert!(approx(series.get(2023).flatten().unwrap(), 0.1));
}

#[tokio::test]
async fn undefined_ebit_is_missing_for_that_year_only() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let series = roic.compute("PARTIAL", 5).await;
    assert_eq!(series.get(2024), Some(None));
    assert!(approx(series.get(2023).flatten().unwrap(), 0.08));
}

#[tokio::test]
async fn failing_and_unknown_tickers_yield_empty_series() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();

    let failed = roic.compute_report("FAIL", 5).await;
    assert!(failed.series.is_empty());
    assert!(matches!(failed.error, Some(RoicError::Connector { .. })));

    let unknown = roic.compute_report("NOPE", 5).await;
    assert!(unknown.series.is_empty());
    assert!(matches!(unknown.error, Some(RoicError::NotFound { .. })));
}

#[tokio::test]
async fn invalid_arguments_are_reported_not_raised() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    assert!(matches!(
        roic.compute_report("  ", 5).await.error,
        Some(RoicError::InvalidArg(_))
    ));
    assert!(matches!(
        roic.compute_report("AAPL", 0).await.error,
        Some(RoicError::InvalidArg(_))
    ));
}

#[tokio::test]
async fn fetched_but_all_missing_is_no_data_without_error() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let report = roic.compute_report("NEGIC", 1).await;
    assert!(report.error.is_none());
    assert_eq!(report.series.get(2024), Some(None));
    assert!(report.is_no_data());

    let cmp = roic.compare(&["NEGIC"], 1).await;
    assert!(cmp.is_empty());
}
