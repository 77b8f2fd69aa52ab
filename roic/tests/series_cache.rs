mod helpers;

use std::time::Duration;

use roic::{CacheConfig, Capability, Roic, RoicError};
use roic_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::statements;

#[tokio::test]
async fn repeated_request_is_served_from_memory() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let (income, balance) = statements(2024, 100.0, 400.0, 100.0, 0.0);
    ctl.set_income_behavior("ACME", MockBehavior::Return(income)).await;
    ctl.set_balance_behavior("ACME", MockBehavior::Return(balance)).await;

    let roic = Roic::builder().with_connector(conn).build().unwrap();
    let first = roic.compute("acme", 5).await;
    let second = roic.compute("ACME", 5).await;

    assert_eq!(first, second);
    assert_eq!(ctl.call_count(Capability::IncomeStatement, "ACME").await, 1);
    assert_eq!(ctl.call_count(Capability::BalanceSheet, "ACME").await, 1);

    // A different horizon is a different key.
    let _ = roic.compute("ACME", 3).await;
    assert_eq!(ctl.call_count(Capability::IncomeStatement, "ACME").await, 2);
}

#[tokio::test]
async fn failed_reports_are_not_memoized() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_income_behavior("ACME", MockBehavior::Fail(RoicError::connector("dyn", "down")))
        .await;

    let roic = Roic::builder().with_connector(conn).build().unwrap();
    assert!(roic.compute_report("ACME", 5).await.error.is_some());

    let (income, balance) = statements(2024, 100.0, 400.0, 100.0, 0.0);
    ctl.set_income_behavior("ACME", MockBehavior::Return(income)).await;
    ctl.set_balance_behavior("ACME", MockBehavior::Return(balance)).await;
    let report = roic.compute_report("ACME", 5).await;
    assert!(report.error.is_none());
    assert!(report.series.has_data());
}

#[tokio::test]
async fn disabled_cache_always_fetches() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let (income, balance) = statements(2024, 100.0, 400.0, 100.0, 0.0);
    ctl.set_income_behavior("ACME", MockBehavior::Return(income)).await;
    ctl.set_balance_behavior("ACME", MockBehavior::Return(balance)).await;

    let roic = Roic::builder()
        .with_connector(conn)
        .series_cache(CacheConfig::disabled())
        .build()
        .unwrap();
    let _ = roic.compute("ACME", 5).await;
    let _ = roic.compute("ACME", 5).await;
    assert_eq!(ctl.call_count(Capability::IncomeStatement, "ACME").await, 2);
}

#[tokio::test]
async fn entries_expire_after_ttl() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let (income, balance) = statements(2024, 100.0, 400.0, 100.0, 0.0);
    ctl.set_income_behavior("ACME", MockBehavior::Return(income)).await;
    ctl.set_balance_behavior("ACME", MockBehavior::Return(balance)).await;

    let roic = Roic::builder()
        .with_connector(conn)
        .series_cache(CacheConfig {
            ttl_ms: 50,
            max_entries: 16,
        })
        .build()
        .unwrap();
    let _ = roic.compute("ACME", 5).await;
    tokio::time::sleep(Duration::from_millis(120)).await;
    let _ = roic.compute("ACME", 5).await;
    assert_eq!(ctl.call_count(Capability::IncomeStatement, "ACME").await, 2);
}
