use roic::{Capability, Roic, RoicError};
use roic_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{approx, mock, statements};

#[tokio::test]
async fn second_connector_serves_when_first_fails() {
    let (first, ctl) = DynamicMockConnector::new_with_controller("first");
    ctl.set_income_behavior("AAPL", MockBehavior::Fail(RoicError::connector("first", "down")))
        .await;
    ctl.set_balance_behavior("AAPL", MockBehavior::Fail(RoicError::connector("first", "down")))
        .await;

    let roic = Roic::builder()
        .with_connector(first)
        .with_connector(mock())
        .build()
        .unwrap();

    let report = roic.compute_report("AAPL", 5).await;
    assert!(report.error.is_none());
    assert_eq!(report.series.len(), 4);
    assert_eq!(ctl.call_count(Capability::IncomeStatement, "AAPL").await, 1);
}

#[tokio::test]
async fn first_success_wins_per_statement() {
    let (first, ctl) = DynamicMockConnector::new_with_controller("first");
    let (income, balance) = statements(2024, 100.0, 400.0, 100.0, 0.0);
    ctl.set_income_behavior("ACME", MockBehavior::Return(income)).await;
    ctl.set_balance_behavior("ACME", MockBehavior::Return(balance)).await;
    let (second, ctl2) = DynamicMockConnector::new_with_controller("second");

    let roic = Roic::builder()
        .with_connector(first)
        .with_connector(second)
        .build()
        .unwrap();

    let series = roic.compute("ACME", 5).await;
    assert!(approx(series.get(2024).flatten().unwrap(), 0.16));
    assert_eq!(ctl2.call_count(Capability::IncomeStatement, "ACME").await, 0);
    assert_eq!(ctl2.call_count(Capability::BalanceSheet, "ACME").await, 0);
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let (a, _ca) = DynamicMockConnector::new_with_controller("a");
    let (b, _cb) = DynamicMockConnector::new_with_controller("b");
    let roic = Roic::builder().with_connector(a).with_connector(b).build().unwrap();

    let err = roic.income_statement("ZZZ").await.unwrap_err();
    assert!(matches!(err, RoicError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn mixed_failures_collapse_to_all_providers_failed() {
    let (a, ca) = DynamicMockConnector::new_with_controller("a");
    ca.set_balance_behavior("ZZZ", MockBehavior::Fail(RoicError::connector("a", "boom")))
        .await;
    let (b, _cb) = DynamicMockConnector::new_with_controller("b");
    let roic = Roic::builder().with_connector(a).with_connector(b).build().unwrap();

    let err = roic.balance_sheet("ZZZ").await.unwrap_err();
    match err {
        RoicError::AllProvidersFailed(errs) => assert_eq!(errs.len(), 2),
        other => panic!("unexpected {other:?}"),
    }
}
