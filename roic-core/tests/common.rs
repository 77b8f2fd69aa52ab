#![allow(dead_code)]

use chrono::NaiveDate;
use roic_core::line_items as li;
use roic_core::{FinancialStatement, StatementKind, StatementSnapshot};

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
}

pub fn income(date: NaiveDate, ebit: f64, tax_rate: f64) -> StatementSnapshot {
    StatementSnapshot::new(date)
        .with(li::EBIT, ebit)
        .with(li::TAX_RATE_FOR_CALCS, tax_rate)
}

pub fn balance(date: NaiveDate, equity: f64, debt: f64, cash: f64) -> StatementSnapshot {
    StatementSnapshot::new(date)
        .with(li::STOCKHOLDERS_EQUITY, equity)
        .with(li::TOTAL_DEBT, debt)
        .with(li::CASH_AND_CASH_EQUIVALENTS, cash)
}

pub fn income_stmt(rows: impl IntoIterator<Item = StatementSnapshot>) -> FinancialStatement {
    FinancialStatement::from_snapshots(StatementKind::Income, rows)
}

pub fn balance_stmt(rows: impl IntoIterator<Item = StatementSnapshot>) -> FinancialStatement {
    FinancialStatement::from_snapshots(StatementKind::BalanceSheet, rows)
}
