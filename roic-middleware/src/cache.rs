use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use roic_core::connector::{BalanceSheetProvider, IncomeStatementProvider};
use roic_core::{CacheConfig, Capability, FinancialStatement, RoicConnector, RoicError};

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl roic_core::Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn RoicConnector>) -> Arc<dyn RoicConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        "CachingMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "ttl_ms": self.cfg.ttl_ms,
            "max_entries": self.cfg.max_entries,
        })
    }
}

type StatementStore = Cache<String, Arc<FinancialStatement>>;

/// Connector wrapper memoizing successful statement fetches per symbol.
///
/// Errors are never cached, so a transient provider failure is retried on the
/// next call. A disabled `CacheConfig` turns the wrapper into a pass-through.
pub struct CachingConnector {
    inner: Arc<dyn RoicConnector>,
    income: Option<StatementStore>,
    balance: Option<StatementStore>,
}

impl CachingConnector {
    fn maybe_store(cfg: &CacheConfig) -> Option<StatementStore> {
        let ttl = cfg.ttl()?;
        Some(
            Cache::builder()
                .max_capacity(cfg.max_entries)
                .time_to_live(ttl)
                .build(),
        )
    }

    #[must_use]
    pub fn new(inner: Arc<dyn RoicConnector>, cfg: &CacheConfig) -> Self {
        Self {
            inner,
            income: Self::maybe_store(cfg),
            balance: Self::maybe_store(cfg),
        }
    }
}

async fn cached<F>(
    store: Option<&StatementStore>,
    symbol: &str,
    fetch: F,
) -> Result<FinancialStatement, RoicError>
where
    F: Future<Output = Result<FinancialStatement, RoicError>>,
{
    let Some(store) = store else {
        return fetch.await;
    };
    let key = symbol.to_ascii_uppercase();
    if let Some(v) = store.get(&key).await {
        return Ok((*v).clone());
    }
    let value = fetch.await?;
    store.insert(key, Arc::new(value.clone())).await;
    Ok(value)
}

#[async_trait]
impl RoicConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    roic_core::roic_connector_accessors!(inner);
}

#[async_trait]
impl IncomeStatementProvider for CachingConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "roic_middleware::cache::income_statement", skip(self))
    )]
    async fn income_statement(&self, symbol: &str) -> Result<FinancialStatement, RoicError> {
        let inner = self
            .inner
            .as_income_statement_provider()
            .ok_or_else(|| RoicError::unsupported(Capability::IncomeStatement.as_str()))?;
        cached(self.income.as_ref(), symbol, inner.income_statement(symbol)).await
    }
}

#[async_trait]
impl BalanceSheetProvider for CachingConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "roic_middleware::cache::balance_sheet", skip(self))
    )]
    async fn balance_sheet(&self, symbol: &str) -> Result<FinancialStatement, RoicError> {
        let inner = self
            .inner
            .as_balance_sheet_provider()
            .ok_or_else(|| RoicError::unsupported(Capability::BalanceSheet.as_str()))?;
        cached(self.balance.as_ref(), symbol, inner.balance_sheet(symbol)).await
    }
}
