// Shared fixtures for the orchestrator tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use roic::{FinancialStatement, RoicConnector, StatementKind, StatementSnapshot};
use roic_core::line_items as li;
use roic_mock::MockConnector;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn mock() -> Arc<dyn RoicConnector> {
    Arc::new(MockConnector::new())
}

/// One-period statements yielding `ebit * (1 - 0.2) / (equity + debt - cash)`.
pub fn statements(
    year: i32,
    ebit: f64,
    equity: f64,
    debt: f64,
    cash: f64,
) -> (FinancialStatement, FinancialStatement) {
    let end = d(year, 12, 31);
    let income = FinancialStatement::from_snapshots(
        StatementKind::Income,
        [StatementSnapshot::new(end)
            .with(li::EBIT, ebit)
            .with(li::TAX_RATE_FOR_CALCS, 0.2)],
    );
    let balance = FinancialStatement::from_snapshots(
        StatementKind::BalanceSheet,
        [StatementSnapshot::new(end)
            .with(li::STOCKHOLDERS_EQUITY, equity)
            .with(li::TOTAL_DEBT, debt)
            .with(li::CASH_AND_CASH_EQUIVALENTS, cash)],
    );
    (income, balance)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
