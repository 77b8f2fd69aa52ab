use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::series::RoicSeries;

/// Ticker × fiscal-year table assembled from one request's series.
///
/// Rows keep the order in which series were supplied; columns are the union
/// of all years, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResultTable {
    /// Column years, descending.
    pub years: Vec<i32>,
    /// One series per row.
    pub rows: Vec<RoicSeries>,
}

impl ResultTable {
    /// Widen a list of per-ticker series into a table.
    pub fn from_series(series: impl IntoIterator<Item = RoicSeries>) -> Self {
        let rows: Vec<RoicSeries> = series.into_iter().collect();
        let years: BTreeSet<i32> = rows
            .iter()
            .flat_map(|s| s.values.keys().copied())
            .collect();
        Self {
            years: years.into_iter().rev().collect(),
            rows,
        }
    }

    /// Cell value; `None` for both "missing" and "year not reported".
    #[must_use]
    pub fn value(&self, symbol: &str, year: i32) -> Option<f64> {
        self.rows
            .iter()
            .find(|s| s.symbol == symbol)
            .and_then(|s| s.get(year))
            .flatten()
    }

    /// Row symbols in order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|s| s.symbol.as_str())
    }

    /// Whether no cell carries a number (every ticker empty or all-missing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.rows.iter().any(RoicSeries::has_data)
    }
}
