use assert_cmd::Command;
use predicates::prelude::*;

fn roic() -> Command {
    let mut cmd = Command::cargo_bin("roic").unwrap();
    cmd.env_remove("ROIC_USE_MOCK").env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_table_for_fixture_tickers() {
    roic()
        .args(["msft, v", "--years", "3", "--mock"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Ticker"))
        .stdout(predicate::str::contains("MSFT"))
        .stdout(predicate::str::contains("2024"))
        .stdout(predicate::str::contains("2021").not());
}

#[test]
fn env_var_selects_mock() {
    roic()
        .env("ROIC_USE_MOCK", "1")
        .arg("NEGIC")
        .assert()
        .success()
        .stdout(predicate::str::contains("10.00%"))
        .stdout(predicate::str::contains(" -"));
}

#[test]
fn no_data_notice_exits_successfully() {
    roic()
        .args(["FAIL,NOPE", "--mock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No ROIC data found"))
        .stderr(predicate::str::contains("FAIL"));
}

#[test]
fn years_outside_bounds_are_rejected() {
    roic().args(["AAPL", "--years", "1", "--mock"]).assert().failure();
    roic().args(["AAPL", "--years", "11", "--mock"]).assert().failure();
}

#[test]
fn empty_ticker_list_is_an_error() {
    roic().args([" , ", "--mock"]).assert().failure();
}

#[test]
fn writes_csv_when_asked() {
    let path = std::env::temp_dir().join(format!("roic-cli-test-{}.csv", std::process::id()));
    roic()
        .args(["NEGIC,PARTIAL", "--mock", "--csv"])
        .arg(&path)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Ticker,2024,2023"));
    assert_eq!(lines.next(), Some("NEGIC,,0.1"));
    assert!(lines.next().unwrap().starts_with("PARTIAL,,0.08"));
}
