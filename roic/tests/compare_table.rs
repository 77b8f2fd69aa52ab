mod helpers;

use roic::{Roic, format_percent, parse_tickers, render_table, to_csv_string};

use crate::helpers::mock;

#[tokio::test]
async fn table_rows_follow_request_order_and_years_descend() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let tickers = parse_tickers("msft, NEGIC, fail");
    let cmp = roic.compare(&tickers, 5).await;

    assert_eq!(cmp.table.symbols().collect::<Vec<_>>(), ["MSFT", "NEGIC", "FAIL"]);
    assert_eq!(cmp.table.years, [2024, 2023, 2022, 2021]);
    assert_eq!(cmp.table.value("NEGIC", 2024), None);
    assert_eq!(cmp.table.value("FAIL", 2024), None);
    assert!(cmp.reports[2].error.is_some());
    assert!(!cmp.is_empty());
}

#[tokio::test]
async fn csv_carries_raw_ratios_and_blank_missing_cells() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let cmp = roic.compare(&["NEGIC", "PARTIAL"], 5).await;
    let csv = to_csv_string(&cmp.table).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "Ticker,2024,2023");
    assert_eq!(lines[1], "NEGIC,,0.1");
    assert!(lines[2].starts_with("PARTIAL,,0.08"));
}

#[tokio::test]
async fn rendered_table_uses_percentages() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let cmp = roic.compare(&["NEGIC"], 5).await;
    let text = render_table(&cmp.table);

    assert!(text.starts_with("Ticker"));
    assert!(text.contains("2024"));
    assert!(text.contains(&format_percent(Some(0.1))));
    assert!(text.contains(" -"));
}

#[tokio::test]
async fn all_failures_give_an_empty_table() {
    let roic = Roic::builder().with_connector(mock()).build().unwrap();
    let cmp = roic.compare(&["FAIL", "NOPE"], 5).await;
    assert!(cmp.is_empty());
    assert!(cmp.table.years.is_empty());
}
