use roic_types::{DebtPolicy, LineValue, StatementSnapshot, TaxRateSource};

use crate::line_items as li;

/// Inputs to the ROIC formula for one aligned period.
///
/// `None` means undefined: the item was listed without a number and no
/// fallback had one. Items missing from the snapshot altogether default to 0
/// and never produce `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodInputs {
    /// EBIT, falling back to operating income.
    pub ebit: Option<f64>,
    /// Effective tax rate.
    pub tax_rate: Option<f64>,
    /// How `tax_rate` was obtained.
    pub tax_rate_source: TaxRateSource,
    /// Stockholders' equity, falling back to total equity.
    pub equity: Option<f64>,
    /// Total debt per the configured policy.
    pub total_debt: Option<f64>,
    /// Cash, falling back to cash plus short-term investments.
    pub cash: Option<f64>,
}

/// First reported value among `names`, in order.
///
/// Returns `Undefined` when none is reported but at least one is listed.
#[must_use]
pub fn first_available(snapshot: &StatementSnapshot, names: &[&str]) -> LineValue {
    let mut listed = false;
    for name in names {
        match snapshot.get(name) {
            LineValue::Reported(v) => return LineValue::Reported(v),
            LineValue::Undefined => listed = true,
            LineValue::Absent => {}
        }
    }
    if listed {
        LineValue::Undefined
    } else {
        LineValue::Absent
    }
}

const fn or_zero(v: LineValue) -> Option<f64> {
    match v {
        LineValue::Reported(x) => Some(x),
        LineValue::Absent => Some(0.0),
        LineValue::Undefined => None,
    }
}

/// EBIT → Operating Income → 0.
#[must_use]
pub fn ebit(income: &StatementSnapshot) -> Option<f64> {
    or_zero(first_available(income, &[li::EBIT, li::OPERATING_INCOME]))
}

/// Effective tax rate with its source.
///
/// A reported "Tax Rate For Calcs" is used verbatim. Otherwise the rate is
/// tax provision over pretax income, but only when pretax income is strictly
/// positive; anything else falls back to `default_rate`.
#[must_use]
pub fn tax_rate(income: &StatementSnapshot, default_rate: f64) -> (Option<f64>, TaxRateSource) {
    if let LineValue::Reported(rate) = income.get(li::TAX_RATE_FOR_CALCS) {
        return (Some(rate), TaxRateSource::Reported);
    }
    match income.get(li::PRETAX_INCOME) {
        LineValue::Reported(pretax) if pretax > 0.0 => {
            let provision = or_zero(income.get(li::TAX_PROVISION));
            (provision.map(|p| p / pretax), TaxRateSource::Derived)
        }
        _ => (Some(default_rate), TaxRateSource::Statutory),
    }
}

/// Stockholders Equity → Total Equity Gross Minority Interest → 0.
#[must_use]
pub fn equity(balance: &StatementSnapshot) -> Option<f64> {
    or_zero(first_available(
        balance,
        &[li::STOCKHOLDERS_EQUITY, li::TOTAL_EQUITY_GROSS_MINORITY_INTEREST],
    ))
}

/// Total debt under the given policy.
///
/// A "Total Debt" listed without a value only falls back to the components
/// when at least one of them is reported; otherwise debt is undefined.
#[must_use]
pub fn total_debt(balance: &StatementSnapshot, policy: DebtPolicy) -> Option<f64> {
    let current = balance.get(li::CURRENT_DEBT_AND_CAPITAL_LEASE_OBLIGATION);
    let long_term = balance.get(li::LONG_TERM_DEBT_AND_CAPITAL_LEASE_OBLIGATION);
    let components = || Some(or_zero(current)? + or_zero(long_term)?);
    match policy {
        DebtPolicy::ComponentsOnly => components(),
        DebtPolicy::TotalDebtFirst => match balance.get(li::TOTAL_DEBT) {
            LineValue::Reported(v) => Some(v),
            LineValue::Absent => components(),
            LineValue::Undefined => {
                let any_reported = matches!(current, LineValue::Reported(_))
                    || matches!(long_term, LineValue::Reported(_));
                if any_reported {
                    components()
                } else {
                    None
                }
            }
        },
    }
}

/// Cash And Cash Equivalents → Cash Cash Equivalents And Short Term Investments → 0.
#[must_use]
pub fn cash(balance: &StatementSnapshot) -> Option<f64> {
    or_zero(first_available(
        balance,
        &[
            li::CASH_AND_CASH_EQUIVALENTS,
            li::CASH_CASH_EQUIVALENTS_AND_SHORT_TERM_INVESTMENTS,
        ],
    ))
}

/// Extract every formula input for one aligned pair of snapshots.
#[must_use]
pub fn extract_inputs(
    income: &StatementSnapshot,
    balance: &StatementSnapshot,
    debt_policy: DebtPolicy,
    default_tax_rate: f64,
) -> PeriodInputs {
    let (tax_rate, tax_rate_source) = tax_rate(income, default_tax_rate);
    PeriodInputs {
        ebit: ebit(income),
        tax_rate,
        tax_rate_source,
        equity: equity(balance),
        total_debt: total_debt(balance, debt_policy),
        cash: cash(balance),
    }
}
