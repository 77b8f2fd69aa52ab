use std::sync::Arc;
use std::time::Duration;

use roic::{Roic, RoicError};
use roic_mock::{DynamicMockConnector, MockBehavior, MockConnector};

use crate::helpers::statements;

#[tokio::test]
async fn slow_provider_times_out_as_failed_fetch() {
    let slow = MockConnector::new().with_timeout_latency(Duration::from_millis(500));
    let roic = Roic::builder()
        .with_connector(Arc::new(slow))
        .provider_timeout(Duration::from_millis(30))
        .build()
        .unwrap();

    let report = roic.compute_report("TIMEOUT", 5).await;
    assert!(report.series.is_empty());
    match report.error {
        Some(RoicError::ProviderTimeout { connector, capability }) => {
            assert_eq!(connector, "roic");
            assert_eq!(capability, "roic-series");
        }
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn one_deadline_covers_both_statements() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    let (income, _) = statements(2024, 10.0, 100.0, 0.0, 0.0);
    ctl.set_income_behavior("HANG", MockBehavior::Return(income))
        .await;
    ctl.set_balance_behavior("HANG", MockBehavior::Hang).await;

    let roic = Roic::builder()
        .with_connector(conn)
        .provider_timeout(Duration::from_millis(30))
        .build()
        .unwrap();
    let report = roic.compute_report("HANG", 5).await;
    assert!(matches!(report.error, Some(RoicError::ProviderTimeout { .. })));
}

#[tokio::test]
async fn timed_out_ticker_does_not_block_the_others() {
    let slow = MockConnector::new().with_timeout_latency(Duration::from_secs(5));
    let roic = Roic::builder()
        .with_connector(Arc::new(slow))
        .provider_timeout(Duration::from_millis(30))
        .build()
        .unwrap();

    let cmp = roic.compare(&["TIMEOUT", "V"], 3).await;
    assert_eq!(cmp.reports.len(), 2);
    assert!(cmp.reports[0].error.is_some());
    assert!(cmp.reports[1].series.has_data());
}
