use roic_core::RoicConnector;
use std::sync::Arc;

#[must_use]
pub fn get_connector() -> Arc<dyn RoicConnector> {
    if std::env::var("ROIC_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(roic_mock::MockConnector::new())
    } else {
        match roic_yfinance::YfConnector::cached() {
            Ok(b) => b.build(),
            Err(e) => {
                eprintln!("falling back to mock connector: {e}");
                Arc::new(roic_mock::MockConnector::new())
            }
        }
    }
}
