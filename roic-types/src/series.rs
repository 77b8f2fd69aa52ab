use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fiscal year → ROIC for one ticker.
///
/// A `None` value is the explicit "missing" marker: the period was aligned
/// and extracted but produced no meaningful ratio (e.g. invested capital ≤ 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RoicSeries {
    /// Ticker symbol, upper-cased.
    pub symbol: String,
    /// Values keyed by fiscal year.
    pub values: BTreeMap<i32, Option<f64>>,
}

impl RoicSeries {
    /// Empty series for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            values: BTreeMap::new(),
        }
    }

    /// Record a value (or the missing marker) for a fiscal year.
    pub fn insert(&mut self, year: i32, roic: Option<f64>) {
        self.values.insert(year, roic);
    }

    /// Value for a year: `None` if the year is absent, `Some(None)` if missing.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<Option<f64>> {
        self.values.get(&year).copied()
    }

    /// Whether the series holds no years.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of years present (missing included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether at least one year carries a number.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.values.values().any(Option::is_some)
    }

    /// Years, most recent first.
    pub fn years_desc(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.keys().rev().copied()
    }
}
