//! Annual statements for a handful of large caps plus edge-case tickers.
//!
//! Figures are rounded and in USD; they only need to be plausible.

use chrono::NaiveDate;
use roic_core::line_items as li;
use roic_core::{FinancialStatement, StatementKind, StatementSnapshot};

const MILLION: f64 = 1_000_000.0;

/// Period end, EBIT, effective tax rate, equity, total debt, cash (USD millions).
type Row = ((i32, u32, u32), f64, f64, f64, f64, f64);

const AAPL: &[Row] = &[
    ((2021, 9, 30), 111_852.0, 0.133, 63_090.0, 136_522.0, 34_940.0),
    ((2022, 9, 30), 119_437.0, 0.162, 50_672.0, 132_480.0, 23_646.0),
    ((2023, 9, 30), 114_301.0, 0.147, 62_146.0, 111_088.0, 29_965.0),
    ((2024, 9, 30), 123_216.0, 0.241, 56_950.0, 106_629.0, 29_943.0),
];

const MSFT: &[Row] = &[
    ((2021, 6, 30), 70_890.0, 0.138, 141_988.0, 67_775.0, 14_224.0),
    ((2022, 6, 30), 83_383.0, 0.131, 166_542.0, 61_270.0, 13_931.0),
    ((2023, 6, 30), 89_690.0, 0.190, 206_223.0, 59_965.0, 34_704.0),
    ((2024, 6, 30), 109_433.0, 0.182, 268_477.0, 67_127.0, 18_315.0),
];

const V: &[Row] = &[
    ((2021, 9, 30), 15_804.0, 0.201, 37_589.0, 24_070.0, 16_487.0),
    ((2022, 9, 30), 18_813.0, 0.186, 35_581.0, 22_426.0, 15_689.0),
    ((2023, 9, 30), 21_000.0, 0.179, 38_733.0, 20_463.0, 16_286.0),
    ((2024, 9, 30), 23_595.0, 0.174, 39_137.0, 20_836.0, 11_975.0),
];

const GOOGL: &[Row] = &[
    ((2021, 12, 31), 78_714.0, 0.162, 251_635.0, 28_395.0, 20_945.0),
    ((2022, 12, 31), 74_842.0, 0.159, 256_144.0, 29_679.0, 21_879.0),
    ((2023, 12, 31), 84_293.0, 0.139, 283_379.0, 27_122.0, 24_048.0),
    ((2024, 12, 31), 112_390.0, 0.164, 325_084.0, 25_461.0, 23_466.0),
];

// Cash exceeds equity plus debt in 2024, so invested capital is negative.
const NEGIC: &[Row] = &[
    ((2023, 12, 31), 10.0, 0.2, 100.0, 0.0, 20.0),
    ((2024, 12, 31), 10.0, 0.2, 10.0, 5.0, 20.0),
];

// 2024 EBIT is listed without a value.
const PARTIAL: &[Row] = &[
    ((2023, 12, 31), 50.0, 0.2, 400.0, 100.0, 0.0),
    ((2024, 12, 31), f64::NAN, 0.2, 400.0, 100.0, 0.0),
];

fn rows(symbol: &str) -> Option<&'static [Row]> {
    match symbol {
        "AAPL" => Some(AAPL),
        "MSFT" => Some(MSFT),
        "V" => Some(V),
        "GOOGL" => Some(GOOGL),
        "NEGIC" => Some(NEGIC),
        "PARTIAL" => Some(PARTIAL),
        _ => None,
    }
}

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Tickers backed by fixture data.
pub const SYMBOLS: &[&str] = &["AAPL", "MSFT", "V", "GOOGL", "NEGIC", "PARTIAL"];

pub fn income_by_symbol(symbol: &str) -> Option<FinancialStatement> {
    let rows = rows(symbol)?;
    let snapshots = rows.iter().map(|&(end, ebit, tax, ..)| {
        let s = StatementSnapshot::new(date(end));
        match symbol {
            // Reported the way Yahoo does for some issuers: no EBIT line and
            // no precomputed rate.
            "GOOGL" => {
                let pretax = ebit * 1.02;
                s.with(li::OPERATING_INCOME, ebit * MILLION)
                    .with(li::PRETAX_INCOME, pretax * MILLION)
                    .with(li::TAX_PROVISION, pretax * tax * MILLION)
            }
            "PARTIAL" if ebit.is_nan() => s
                .with_undefined(li::EBIT)
                .with(li::TAX_RATE_FOR_CALCS, tax),
            _ => s
                .with(li::EBIT, ebit * MILLION)
                .with(li::TAX_RATE_FOR_CALCS, tax),
        }
    });
    Some(FinancialStatement::from_snapshots(
        StatementKind::Income,
        snapshots,
    ))
}

pub fn balance_sheet_by_symbol(symbol: &str) -> Option<FinancialStatement> {
    let rows = rows(symbol)?;
    let snapshots = rows.iter().map(|&(end, _, _, equity, debt, cash)| {
        let s = StatementSnapshot::new(date(end));
        match symbol {
            // Debt split into its components, equity under the group label.
            "MSFT" => {
                let current = (debt * 0.15).round();
                s.with(li::TOTAL_EQUITY_GROSS_MINORITY_INTEREST, equity * MILLION)
                    .with(li::CURRENT_DEBT_AND_CAPITAL_LEASE_OBLIGATION, current * MILLION)
                    .with(
                        li::LONG_TERM_DEBT_AND_CAPITAL_LEASE_OBLIGATION,
                        (debt - current) * MILLION,
                    )
                    .with(li::CASH_AND_CASH_EQUIVALENTS, cash * MILLION)
            }
            "V" => s
                .with(li::STOCKHOLDERS_EQUITY, equity * MILLION)
                .with(li::TOTAL_DEBT, debt * MILLION)
                .with(
                    li::CASH_CASH_EQUIVALENTS_AND_SHORT_TERM_INVESTMENTS,
                    cash * MILLION,
                ),
            _ => s
                .with(li::STOCKHOLDERS_EQUITY, equity * MILLION)
                .with(li::TOTAL_DEBT, debt * MILLION)
                .with(li::CASH_AND_CASH_EQUIVALENTS, cash * MILLION),
        }
    });
    Some(FinancialStatement::from_snapshots(
        StatementKind::BalanceSheet,
        snapshots,
    ))
}
