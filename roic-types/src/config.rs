//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How income-statement and balance-sheet periods are paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlignmentPolicy {
    /// Use only period-end dates present in both statements, most recent first.
    #[default]
    DateIntersection,
    /// Pair the i-th most recent column of each statement.
    ///
    /// Only correct when both statements share identical period boundaries;
    /// mismatched dates are logged and a missing counterpart skips the period.
    Positional,
}

/// How total debt is derived from balance-sheet line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DebtPolicy {
    /// Prefer a reported "Total Debt"; fall back to current + long-term obligations.
    #[default]
    TotalDebtFirst,
    /// Always sum current + long-term obligations.
    ComponentsOnly,
}

/// TTL and size bounds for a cache store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live in milliseconds; `0` disables the cache.
    pub ttl_ms: u64,
    /// Maximum number of entries kept before eviction.
    pub max_entries: u64,
}

impl CacheConfig {
    /// A configuration that disables caching.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            ttl_ms: 0,
            max_entries: 0,
        }
    }

    /// Effective TTL, or `None` when caching is disabled.
    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        if self.ttl_ms == 0 || self.max_entries == 0 {
            None
        } else {
            Some(Duration::from_millis(self.ttl_ms))
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: 60 * 60 * 1000,
            max_entries: 512,
        }
    }
}

/// Global configuration for the `Roic` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoicConfig {
    /// Period pairing policy.
    pub alignment: AlignmentPolicy,
    /// Total debt derivation policy.
    pub debt_policy: DebtPolicy,
    /// Flat statutory rate used when no effective rate can be derived.
    pub default_tax_rate: f64,
    /// Deadline covering both statement fetches for one ticker.
    pub provider_timeout: Duration,
    /// Memoization of computed series keyed by `(ticker, years)`.
    pub series_cache: CacheConfig,
}

impl RoicConfig {
    /// Statutory fallback tax rate.
    pub const DEFAULT_TAX_RATE: f64 = 0.21;
}

impl Default for RoicConfig {
    fn default() -> Self {
        Self {
            alignment: AlignmentPolicy::default(),
            debt_policy: DebtPolicy::default(),
            default_tax_rate: Self::DEFAULT_TAX_RATE,
            provider_timeout: Duration::from_secs(10),
            series_cache: CacheConfig::default(),
        }
    }
}
