use async_trait::async_trait;

use crate::RoicError;
pub use roic_types::ConnectorKey;
use roic_types::FinancialStatement;

/// Focused role trait for connectors that provide annual income statements.
#[async_trait]
pub trait IncomeStatementProvider: Send + Sync {
    /// Fetch every annual income-statement period available for `symbol`.
    ///
    /// An unknown symbol should yield `NotFound` or an empty statement.
    async fn income_statement(&self, symbol: &str) -> Result<FinancialStatement, RoicError>;
}

/// Focused role trait for connectors that provide annual balance sheets.
#[async_trait]
pub trait BalanceSheetProvider: Send + Sync {
    /// Fetch every annual balance-sheet period available for `symbol`.
    async fn balance_sheet(&self, symbol: &str) -> Result<FinancialStatement, RoicError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait RoicConnector: Send + Sync {
    /// A stable identifier used in logs and errors (e.g., "roic-yfinance").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// If implemented, returns a trait object for income statements.
    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        None
    }

    /// If implemented, returns a trait object for balance sheets.
    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        None
    }
}

/// Generate `as_*_provider` accessors for a wrapper that implements
/// `RoicConnector` by delegating to an inner field.
///
/// The wrapper must itself implement both provider traits; each accessor only
/// advertises the capability when the inner connector does.
#[macro_export]
macro_rules! roic_connector_accessors {
    ($inner:ident) => {
        fn as_income_statement_provider(
            &self,
        ) -> Option<&dyn $crate::connector::IncomeStatementProvider> {
            if self.$inner.as_income_statement_provider().is_some() {
                Some(self as &dyn $crate::connector::IncomeStatementProvider)
            } else {
                None
            }
        }
        fn as_balance_sheet_provider(
            &self,
        ) -> Option<&dyn $crate::connector::BalanceSheetProvider> {
            if self.$inner.as_balance_sheet_provider().is_some() {
                Some(self as &dyn $crate::connector::BalanceSheetProvider)
            } else {
                None
            }
        }
    };
}
