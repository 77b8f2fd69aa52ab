use std::time::Duration;

use roic_core::{CacheConfig, Capability};
use roic_middleware::ConnectorBuilder;
use roic_mock::{DynamicMockConnector, MockBehavior};

#[tokio::test]
async fn ttl_expiration_causes_refetch() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    ctrl.set_income_behavior(
        "AAPL",
        MockBehavior::Return(roic_core::FinancialStatement::new(
            roic_core::StatementKind::Income,
        )),
    )
    .await;
    let cfg = CacheConfig {
        ttl_ms: 30,
        max_entries: 8,
    };
    let wrapped = ConnectorBuilder::new(raw).with_cache(&cfg).build();
    let is = wrapped.as_income_statement_provider().unwrap();

    is.income_statement("AAPL").await.unwrap();
    is.income_statement("AAPL").await.unwrap();
    assert_eq!(ctrl.call_count(Capability::IncomeStatement, "AAPL").await, 1);

    tokio::time::sleep(Duration::from_millis(80)).await;
    is.income_statement("AAPL").await.unwrap();
    assert_eq!(ctrl.call_count(Capability::IncomeStatement, "AAPL").await, 2);
}
