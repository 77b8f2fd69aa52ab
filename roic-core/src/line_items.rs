//! Display names of the statement line items used by the extractor.
//!
//! Names follow the provider's human-readable labels. Fallback order for each
//! quantity is encoded in `extract`, not here.

/// Earnings before interest and taxes.
pub const EBIT: &str = "EBIT";
/// Fallback for EBIT.
pub const OPERATING_INCOME: &str = "Operating Income";
/// Pre-computed effective tax rate.
pub const TAX_RATE_FOR_CALCS: &str = "Tax Rate For Calcs";
/// Income before taxes.
pub const PRETAX_INCOME: &str = "Pretax Income";
/// Income tax expense.
pub const TAX_PROVISION: &str = "Tax Provision";

/// Equity attributable to common shareholders.
pub const STOCKHOLDERS_EQUITY: &str = "Stockholders Equity";
/// Fallback for stockholders' equity.
pub const TOTAL_EQUITY_GROSS_MINORITY_INTEREST: &str = "Total Equity Gross Minority Interest";
/// Combined interest-bearing debt.
pub const TOTAL_DEBT: &str = "Total Debt";
/// Short-term part of debt, leases included.
pub const CURRENT_DEBT_AND_CAPITAL_LEASE_OBLIGATION: &str =
    "Current Debt And Capital Lease Obligation";
/// Long-term part of debt, leases included.
pub const LONG_TERM_DEBT_AND_CAPITAL_LEASE_OBLIGATION: &str =
    "Long Term Debt And Capital Lease Obligation";
/// Cash and equivalents.
pub const CASH_AND_CASH_EQUIVALENTS: &str = "Cash And Cash Equivalents";
/// Fallback for cash.
pub const CASH_CASH_EQUIVALENTS_AND_SHORT_TERM_INVESTMENTS: &str =
    "Cash Cash Equivalents And Short Term Investments";

/// Income-statement items a connector should fetch.
pub const INCOME_STATEMENT_ITEMS: &[&str] = &[
    EBIT,
    OPERATING_INCOME,
    TAX_RATE_FOR_CALCS,
    PRETAX_INCOME,
    TAX_PROVISION,
];

/// Balance-sheet items a connector should fetch.
pub const BALANCE_SHEET_ITEMS: &[&str] = &[
    STOCKHOLDERS_EQUITY,
    TOTAL_EQUITY_GROSS_MINORITY_INTEREST,
    TOTAL_DEBT,
    CURRENT_DEBT_AND_CAPITAL_LEASE_OBLIGATION,
    LONG_TERM_DEBT_AND_CAPITAL_LEASE_OBLIGATION,
    CASH_AND_CASH_EQUIVALENTS,
    CASH_CASH_EQUIVALENTS_AND_SHORT_TERM_INVESTMENTS,
];
