//! roic-mock
//!
//! Deterministic connectors for tests and offline runs of the CLI.
//!
//! - [`MockConnector`] serves static fixtures for `AAPL`, `MSFT`, `V`, `GOOGL`
//!   and two edge-case tickers: `NEGIC` (negative invested capital in 2024)
//!   and `PARTIAL` (2024 EBIT listed without a value). `FAIL` always errors
//!   and `TIMEOUT` answers after a short delay.
//! - [`DynamicMockConnector`] is scripted per symbol at runtime.

use std::time::Duration;

use async_trait::async_trait;
use roic_core::connector::{BalanceSheetProvider, IncomeStatementProvider, RoicConnector};
use roic_core::{Capability, FinancialStatement, RoicError};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};
pub use fixtures::fundamentals::SYMBOLS as FIXTURE_SYMBOLS;

/// Mock connector for CI-safe tests. Provides deterministic data from static fixtures.
pub struct MockConnector {
    latency: Duration,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Stable connector name.
    pub const NAME: &'static str = "roic-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Duration::from_millis(200),
        }
    }

    /// Override the delay applied to the `TIMEOUT` ticker.
    #[must_use]
    pub const fn with_timeout_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn maybe_fail_or_timeout(
        &self,
        symbol: &str,
        capability: Capability,
    ) -> Result<(), RoicError> {
        match symbol {
            "FAIL" => Err(RoicError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(self.latency).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RoicConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }
    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        Some(self as &dyn IncomeStatementProvider)
    }
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        Some(self as &dyn BalanceSheetProvider)
    }
}

#[async_trait]
impl IncomeStatementProvider for MockConnector {
    async fn income_statement(&self, symbol: &str) -> Result<FinancialStatement, RoicError> {
        self.maybe_fail_or_timeout(symbol, Capability::IncomeStatement)
            .await?;
        // TIMEOUT reuses AAPL's fixtures once the delay has elapsed.
        let lookup = if symbol == "TIMEOUT" { "AAPL" } else { symbol };
        fixtures::fundamentals::income_by_symbol(lookup)
            .ok_or_else(|| RoicError::not_found(format!("income statement for {symbol}")))
    }
}

#[async_trait]
impl BalanceSheetProvider for MockConnector {
    async fn balance_sheet(&self, symbol: &str) -> Result<FinancialStatement, RoicError> {
        self.maybe_fail_or_timeout(symbol, Capability::BalanceSheet)
            .await?;
        let lookup = if symbol == "TIMEOUT" { "AAPL" } else { symbol };
        fixtures::fundamentals::balance_sheet_by_symbol(lookup)
            .ok_or_else(|| RoicError::not_found(format!("balance sheet for {symbol}")))
    }
}
