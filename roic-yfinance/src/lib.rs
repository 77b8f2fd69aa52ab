//! roic-yfinance
//!
//! Public connector that implements `RoicConnector` on top of Yahoo Finance's
//! fundamentals time-series endpoint. Exposes annual income statements and
//! balance sheets keyed by Yahoo's display line-item names.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use adapter::{RealAdapter, TimeseriesPoint, YfFundamentals};
use async_trait::async_trait;
use roic_core::connector::{
    BalanceSheetProvider, ConnectorKey, IncomeStatementProvider, RoicConnector,
};
use roic_core::line_items::{BALANCE_SHEET_ITEMS, INCOME_STATEMENT_ITEMS};
use roic_core::{FinancialStatement, RoicError, StatementKind, StatementSnapshot};

pub use builder::YfConnectorBuilder;

/// Public connector type. Production users will construct with `YfConnector::new()`.
pub struct YfConnector {
    fundamentals: Arc<dyn YfFundamentals>,
}

impl YfConnector {
    /// Static connector key for orchestrator configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("roic-yfinance");

    /// Per-request HTTP timeout of the default adapter.
    pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(8);

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: RoicError, what: &str) -> RoicError {
        match e {
            RoicError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    RoicError::not_found(what.to_string())
                } else {
                    RoicError::connector(Self::KEY.as_str(), msg)
                }
            }
            RoicError::Other(msg) => RoicError::connector(Self::KEY.as_str(), msg),
            other => other,
        }
    }

    /// Build against the public Yahoo host.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn try_new_default() -> Result<Self, RoicError> {
        Self::with_base_url(adapter::DEFAULT_BASE_URL)
    }

    /// Build against an alternate host (a proxy or a local mock server).
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unusable URL, or an error if the HTTP
    /// client cannot be constructed.
    pub fn with_base_url(base: &str) -> Result<Self, RoicError> {
        let a = RealAdapter::try_new(base, Self::DEFAULT_HTTP_TIMEOUT)?;
        Ok(Self::from_adapter(Arc::new(a)))
    }

    /// Build from any fundamentals adapter (used for injection in tests).
    #[must_use]
    pub fn from_adapter(fundamentals: Arc<dyn YfFundamentals>) -> Self {
        Self { fundamentals }
    }

    async fn statement(
        &self,
        symbol: &str,
        kind: StatementKind,
        items: &[&str],
        what: &str,
    ) -> Result<FinancialStatement, RoicError> {
        let points = self
            .fundamentals
            .annual_timeseries(symbol, items)
            .await
            .map_err(|e| Self::normalize_error(e, what))?;
        let statement = group_by_period(kind, points);
        if statement.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(symbol, what, "empty fundamentals time series");
            return Err(RoicError::not_found(what.to_string()));
        }
        Ok(statement)
    }
}

fn group_by_period(kind: StatementKind, points: Vec<TimeseriesPoint>) -> FinancialStatement {
    let mut periods: BTreeMap<_, StatementSnapshot> = BTreeMap::new();
    for p in points {
        let snap = periods
            .entry(p.as_of)
            .or_insert_with(|| StatementSnapshot::new(p.as_of));
        snap.items.insert(p.item, p.value);
    }
    FinancialStatement::from_snapshots(kind, periods.into_values())
}

#[async_trait]
impl IncomeStatementProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "roic_yfinance::income_statement", skip(self))
    )]
    async fn income_statement(&self, symbol: &str) -> Result<FinancialStatement, RoicError> {
        self.statement(
            symbol,
            StatementKind::Income,
            INCOME_STATEMENT_ITEMS,
            &format!("income statement for {symbol}"),
        )
        .await
    }
}

#[async_trait]
impl BalanceSheetProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "roic_yfinance::balance_sheet", skip(self))
    )]
    async fn balance_sheet(&self, symbol: &str) -> Result<FinancialStatement, RoicError> {
        self.statement(
            symbol,
            StatementKind::BalanceSheet,
            BALANCE_SHEET_ITEMS,
            &format!("balance sheet for {symbol}"),
        )
        .await
    }
}

#[async_trait]
impl RoicConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        Some(self as &dyn IncomeStatementProvider)
    }

    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        Some(self as &dyn BalanceSheetProvider)
    }
}
