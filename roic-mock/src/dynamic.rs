use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use roic_core::connector::{BalanceSheetProvider, IncomeStatementProvider, RoicConnector};
use roic_core::{Capability, FinancialStatement, RoicError};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(RoicError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    income_rules: HashMap<String, MockBehavior<FinancialStatement>>,
    balance_rules: HashMap<String, MockBehavior<FinancialStatement>>,
    calls: HashMap<(Capability, String), usize>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `income_statement` calls for a specific symbol.
    pub async fn set_income_behavior(
        &self,
        symbol: &str,
        behavior: MockBehavior<FinancialStatement>,
    ) {
        let mut guard = self.state.lock().await;
        guard.income_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `balance_sheet` calls for a specific symbol.
    pub async fn set_balance_behavior(
        &self,
        symbol: &str,
        behavior: MockBehavior<FinancialStatement>,
    ) {
        let mut guard = self.state.lock().await;
        guard.balance_rules.insert(symbol.to_string(), behavior);
    }

    /// Number of calls received for a capability and symbol.
    pub async fn call_count(&self, capability: Capability, symbol: &str) -> usize {
        let guard = self.state.lock().await;
        guard
            .calls
            .get(&(capability, symbol.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Clear all configured behaviors and call counts.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.income_rules.clear();
        guard.balance_rules.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Symbols without a configured behavior yield `NotFound`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn RoicConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn RoicConnector>, controller)
    }

    async fn resolve(
        &self,
        capability: Capability,
        symbol: &str,
    ) -> Result<FinancialStatement, RoicError> {
        // Snapshot the behavior so the lock is not held across the hang.
        let behavior = {
            let mut guard = self.state.lock().await;
            *guard
                .calls
                .entry((capability, symbol.to_string()))
                .or_insert(0) += 1;
            let rules = match capability {
                Capability::BalanceSheet => &guard.balance_rules,
                _ => &guard.income_rules,
            };
            rules.get(symbol).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(RoicError::not_found(format!("{capability} for {symbol}"))),
        }
    }
}

#[async_trait]
impl RoicConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        Some(self as &dyn IncomeStatementProvider)
    }

    fn as_balance_sheet_provider(&self) -> Option<&dyn BalanceSheetProvider> {
        Some(self as &dyn BalanceSheetProvider)
    }
}

#[async_trait]
impl IncomeStatementProvider for DynamicMockConnector {
    async fn income_statement(&self, symbol: &str) -> Result<FinancialStatement, RoicError> {
        self.resolve(Capability::IncomeStatement, symbol).await
    }
}

#[async_trait]
impl BalanceSheetProvider for DynamicMockConnector {
    async fn balance_sheet(&self, symbol: &str) -> Result<FinancialStatement, RoicError> {
        self.resolve(Capability::BalanceSheet, symbol).await
    }
}
