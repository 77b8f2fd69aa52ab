use core::fmt;
use serde::{Deserialize, Serialize};

/// Capability labels for errors, caching and telemetry.
///
/// These map one-to-one with the provider role traits in `roic-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Fundamentals: annual income statement.
    IncomeStatement,
    /// Fundamentals: annual balance sheet.
    BalanceSheet,
    /// Derived: ROIC series computed from both statements.
    RoicSeries,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomeStatement => "income-statement",
            Self::BalanceSheet => "balance-sheet",
            Self::RoicSeries => "roic-series",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
