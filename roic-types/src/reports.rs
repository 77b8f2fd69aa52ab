//! Report envelopes produced by the orchestrator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RoicError;
use crate::series::RoicSeries;

/// Where the tax rate for a period came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRateSource {
    /// The provider's pre-computed effective rate.
    Reported,
    /// Tax provision divided by positive pretax income.
    Derived,
    /// Flat statutory fallback.
    Statutory,
}

/// Intermediate quantities for one aligned period.
///
/// `None` fields are undefined (the inputs were listed without a number and
/// no fallback was available).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRoic {
    /// Income-statement period end.
    pub period_end: NaiveDate,
    /// Fiscal-year label.
    pub fiscal_year: i32,
    /// Effective tax rate.
    pub tax_rate: Option<f64>,
    /// Source of `tax_rate`.
    pub tax_rate_source: TaxRateSource,
    /// EBIT × (1 − tax rate).
    pub nopat: Option<f64>,
    /// Equity + total debt − cash.
    pub invested_capital: Option<f64>,
    /// NOPAT ÷ invested capital when invested capital is positive.
    pub roic: Option<f64>,
}

/// Why a single period was dropped from the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PeriodFailureKind {
    /// Positional alignment found no balance-sheet column at this index.
    MissingCounterpart,
    /// A more recent period already claimed this fiscal year.
    ///
    /// The most recent period end is kept and the older one is dropped. A
    /// last-write-wins merge over ascending dates would keep the older one.
    DuplicateFiscalYear,
    /// An intermediate quantity overflowed to a non-finite number.
    NonFinite {
        /// Name of the offending quantity.
        quantity: String,
    },
}

/// A period that was skipped while the rest of the ticker continued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodFailure {
    /// Period end of the skipped income-statement column.
    pub period_end: NaiveDate,
    /// Failure reason.
    pub kind: PeriodFailureKind,
}

/// Outcome of computing one ticker.
///
/// `error` is set when the ticker as a whole could not be fetched; the series
/// is then empty. `skipped` lists periods dropped in an otherwise usable fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeriesReport {
    /// The resulting series.
    pub series: RoicSeries,
    /// Per-period details, most recent first.
    pub periods: Vec<PeriodRoic>,
    /// Periods skipped because of isolated failures.
    pub skipped: Vec<PeriodFailure>,
    /// Whole-ticker failure, if any.
    pub error: Option<RoicError>,
}

impl SeriesReport {
    /// Report for a ticker whose fetch failed entirely.
    pub fn failed(symbol: impl Into<String>, error: RoicError) -> Self {
        Self {
            series: RoicSeries::new(symbol),
            periods: Vec::new(),
            skipped: Vec::new(),
            error: Some(error),
        }
    }

    /// Whether the ticker produced no numeric ROIC at all.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        !self.series.has_data()
    }
}
