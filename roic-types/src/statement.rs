//! Financial statement snapshots as delivered by providers.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which statement a snapshot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    /// Income statement (EBIT, taxes, pretax income).
    Income,
    /// Balance sheet (equity, debt, cash).
    BalanceSheet,
}

/// Result of looking up a named line item in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineValue {
    /// The provider reported a finite number.
    Reported(f64),
    /// The line item exists but carries no usable number (null or NaN).
    Undefined,
    /// The line item is not present at all.
    Absent,
}

impl LineValue {
    /// The reported number, if any.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Reported(v) => Some(v),
            Self::Undefined | Self::Absent => None,
        }
    }
}

/// One reporting period's line items for one ticker and one statement.
///
/// Line items are keyed by display name (e.g. `"Stockholders Equity"`).
/// A `None` value means the provider listed the item without a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSnapshot {
    /// Period-end date.
    pub period_end: NaiveDate,
    /// Named line items.
    pub items: BTreeMap<String, Option<f64>>,
}

impl StatementSnapshot {
    /// Empty snapshot for the given period end.
    #[must_use]
    pub const fn new(period_end: NaiveDate) -> Self {
        Self {
            period_end,
            items: BTreeMap::new(),
        }
    }

    /// Builder-style insert of a reported value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.items.insert(name.into(), Some(value));
        self
    }

    /// Builder-style insert of a listed-but-undefined value.
    #[must_use]
    pub fn with_undefined(mut self, name: impl Into<String>) -> Self {
        self.items.insert(name.into(), None);
        self
    }

    /// Look up a line item by display name.
    #[must_use]
    pub fn get(&self, name: &str) -> LineValue {
        match self.items.get(name) {
            None => LineValue::Absent,
            Some(Some(v)) if v.is_finite() => LineValue::Reported(*v),
            Some(_) => LineValue::Undefined,
        }
    }

    /// Calendar year of the period end, used as the fiscal-year label.
    #[must_use]
    pub fn fiscal_year(&self) -> i32 {
        self.period_end.year()
    }
}

/// All annual snapshots of one statement kind for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatement {
    /// Statement kind.
    pub kind: StatementKind,
    /// Snapshots keyed by period-end date.
    pub periods: BTreeMap<NaiveDate, StatementSnapshot>,
}

impl FinancialStatement {
    /// Empty statement of the given kind.
    #[must_use]
    pub const fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            periods: BTreeMap::new(),
        }
    }

    /// Build from a list of snapshots; later duplicates of a date replace earlier ones.
    pub fn from_snapshots(
        kind: StatementKind,
        snapshots: impl IntoIterator<Item = StatementSnapshot>,
    ) -> Self {
        let mut out = Self::new(kind);
        for s in snapshots {
            out.insert(s);
        }
        out
    }

    /// Insert or replace the snapshot for its period end.
    pub fn insert(&mut self, snapshot: StatementSnapshot) {
        self.periods.insert(snapshot.period_end, snapshot);
    }

    /// Whether no periods are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Snapshot for an exact period end.
    #[must_use]
    pub fn get(&self, period_end: &NaiveDate) -> Option<&StatementSnapshot> {
        self.periods.get(period_end)
    }

    /// Snapshots ordered most recent first.
    pub fn most_recent_first(&self) -> impl Iterator<Item = &StatementSnapshot> {
        self.periods.values().rev()
    }
}
