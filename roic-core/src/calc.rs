use chrono::NaiveDate;
use roic_types::{PeriodFailureKind, PeriodRoic};

use crate::extract::PeriodInputs;

/// EBIT × (1 − tax rate).
#[must_use]
pub fn nopat(ebit: f64, tax_rate: f64) -> f64 {
    ebit * (1.0 - tax_rate)
}

/// Equity + total debt − cash.
#[must_use]
pub fn invested_capital(equity: f64, total_debt: f64, cash: f64) -> f64 {
    equity + total_debt - cash
}

/// NOPAT ÷ invested capital, or `None` when either is undefined or invested
/// capital is not strictly positive.
#[must_use]
pub fn roic(nopat: Option<f64>, invested_capital: Option<f64>) -> Option<f64> {
    match (nopat, invested_capital) {
        (Some(n), Some(ic)) if ic > 0.0 => Some(n / ic),
        _ => None,
    }
}

fn finite(quantity: &str, v: Option<f64>) -> Result<Option<f64>, PeriodFailureKind> {
    match v {
        Some(x) if !x.is_finite() => Err(PeriodFailureKind::NonFinite {
            quantity: quantity.to_string(),
        }),
        other => Ok(other),
    }
}

/// Evaluate the formula for one period.
///
/// # Errors
/// Returns `NonFinite` when an intermediate quantity overflows; the caller
/// skips the period and keeps the others.
pub fn evaluate(
    period_end: NaiveDate,
    fiscal_year: i32,
    inputs: &PeriodInputs,
) -> Result<PeriodRoic, PeriodFailureKind> {
    let after_tax = finite(
        "nopat",
        inputs.ebit.zip(inputs.tax_rate).map(|(e, t)| nopat(e, t)),
    )?;
    let capital = match (inputs.equity, inputs.total_debt, inputs.cash) {
        (Some(e), Some(d), Some(c)) => Some(invested_capital(e, d, c)),
        _ => None,
    };
    let capital = finite("invested capital", capital)?;
    let ratio = finite("roic", roic(after_tax, capital))?;
    Ok(PeriodRoic {
        period_end,
        fiscal_year,
        tax_rate: inputs.tax_rate,
        tax_rate_source: inputs.tax_rate_source,
        nopat: after_tax,
        invested_capital: capital,
        roic: ratio,
    })
}
