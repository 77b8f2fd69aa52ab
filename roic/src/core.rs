use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use roic_core::{
    AlignmentPolicy, CacheConfig, DebtPolicy, RoicConfig, RoicConnector, RoicError, SeriesReport,
};

pub(crate) type SeriesCache = Cache<(String, usize), SeriesReport>;

/// Orchestrator that fetches statements from registered providers and
/// computes ROIC series.
pub struct Roic {
    pub(crate) connectors: Vec<Arc<dyn RoicConnector>>,
    pub(crate) cfg: RoicConfig,
    pub(crate) series_cache: Option<SeriesCache>,
}

/// Builder for constructing a `Roic` orchestrator with custom configuration.
pub struct RoicBuilder {
    connectors: Vec<Arc<dyn RoicConnector>>,
    cfg: RoicConfig,
}

impl Default for RoicBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RoicBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: RoicConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Connectors are tried in registration order; the first success wins
    /// per statement. Duplicates are not deduplicated.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn RoicConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: RoicConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set how income-statement and balance-sheet periods are paired.
    #[must_use]
    pub const fn alignment(mut self, policy: AlignmentPolicy) -> Self {
        self.cfg.alignment = policy;
        self
    }

    /// Set how total debt is derived.
    #[must_use]
    pub const fn debt_policy(mut self, policy: DebtPolicy) -> Self {
        self.cfg.debt_policy = policy;
        self
    }

    /// Set the statutory fallback tax rate.
    #[must_use]
    pub const fn default_tax_rate(mut self, rate: f64) -> Self {
        self.cfg.default_tax_rate = rate;
        self
    }

    /// Set the deadline shared by both statement fetches of one ticker.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Configure memoization of computed series; `CacheConfig::disabled()` turns it off.
    #[must_use]
    pub const fn series_cache(mut self, cfg: CacheConfig) -> Self {
        self.cfg.series_cache = cfg;
        self
    }

    /// Build the `Roic` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors are registered, the fallback tax
    /// rate is outside `[0, 1]`, or the provider timeout is zero.
    pub fn build(self) -> Result<Roic, RoicError> {
        if self.connectors.is_empty() {
            return Err(RoicError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        let rate = self.cfg.default_tax_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(RoicError::InvalidArg(format!(
                "default_tax_rate must be within [0, 1], got {rate}"
            )));
        }
        if self.cfg.provider_timeout.is_zero() {
            return Err(RoicError::InvalidArg(
                "provider_timeout must be non-zero".to_string(),
            ));
        }

        let series_cache = self.cfg.series_cache.ttl().map(|ttl| {
            Cache::builder()
                .max_capacity(self.cfg.series_cache.max_entries)
                .time_to_live(ttl)
                .build()
        });

        Ok(Roic {
            connectors: self.connectors,
            cfg: self.cfg,
            series_cache,
        })
    }
}

/// Attach the connector name to errors that do not already carry provider context.
pub fn tag_err(connector: &str, e: RoicError) -> RoicError {
    match e {
        e @ (RoicError::NotFound { .. }
        | RoicError::ProviderTimeout { .. }
        | RoicError::Connector { .. }
        | RoicError::AllProvidersFailed(_)) => e,
        other => RoicError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Roic {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "roic::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, RoicError>
    where
        Fut: core::future::Future<Output = Result<T, RoicError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(RoicError::provider_timeout(connector_name, capability)))
    }

    /// Start building a new `Roic` instance.
    #[must_use]
    pub fn builder() -> RoicBuilder {
        RoicBuilder::new()
    }

    /// The effective configuration.
    #[must_use]
    pub const fn config(&self) -> &RoicConfig {
        &self.cfg
    }

    /// Try each registered connector in order until one succeeds.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "roic::core::fetch_single",
            skip(self, call),
            fields(symbol = %symbol, capability = %capability_label),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        symbol: &str,
        capability_label: &'static str,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, RoicError>
    where
        F: Fn(Arc<dyn RoicConnector>, String) -> Option<Fut>,
        Fut: core::future::Future<Output = Result<T, RoicError>>,
    {
        let mut attempted_any = false;
        let mut errors: Vec<RoicError> = Vec::new();

        for c in &self.connectors {
            let Some(fut) = call(Arc::clone(c), symbol.to_string()) else {
                continue;
            };
            attempted_any = true;
            match fut.await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        connector = c.name(),
                        capability = capability_label,
                        error = %e,
                        "provider call failed"
                    );
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        Err(crate::router::util::collapse_errors(
            capability_label,
            attempted_any,
            errors,
            format!("{not_found_label} for {symbol}"),
        ))
    }
}
