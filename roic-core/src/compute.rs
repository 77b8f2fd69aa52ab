use roic_types::{
    FinancialStatement, PeriodFailure, PeriodFailureKind, RoicConfig, RoicError, RoicSeries,
    SeriesReport,
};

use crate::align::align_periods;
use crate::calc;
use crate::extract::extract_inputs;

fn skip(report: &mut SeriesReport, period_end: chrono::NaiveDate, kind: PeriodFailureKind) {
    #[cfg(feature = "tracing")]
    tracing::warn!(
        symbol = %report.series.symbol,
        period = %period_end,
        reason = ?kind,
        "skipping period"
    );
    report.skipped.push(PeriodFailure { period_end, kind });
}

/// Compute the ROIC series for one ticker from already-fetched statements.
///
/// Never fails as a whole: an empty statement or `num_years == 0` yields an
/// empty series with `error` set, and per-period problems land in `skipped`
/// while the remaining periods are still computed.
#[must_use]
pub fn compute_series(
    symbol: &str,
    income: &FinancialStatement,
    balance: &FinancialStatement,
    num_years: usize,
    cfg: &RoicConfig,
) -> SeriesReport {
    if num_years == 0 {
        return SeriesReport::failed(
            symbol,
            RoicError::InvalidArg("num_years must be at least 1".into()),
        );
    }
    if income.is_empty() || balance.is_empty() {
        return SeriesReport::failed(
            symbol,
            RoicError::not_found(format!("financial statements for {symbol}")),
        );
    }

    let mut report = SeriesReport {
        series: RoicSeries::new(symbol),
        ..SeriesReport::default()
    };

    for period in align_periods(income, balance, cfg.alignment, num_years) {
        let is = period.income;
        let Some(bs) = period.balance else {
            skip(&mut report, is.period_end, PeriodFailureKind::MissingCounterpart);
            continue;
        };
        let year = is.fiscal_year();
        // Most recent period wins a fiscal-year collision.
        if report.series.get(year).is_some() {
            skip(&mut report, is.period_end, PeriodFailureKind::DuplicateFiscalYear);
            continue;
        }
        let inputs = extract_inputs(is, bs, cfg.debt_policy, cfg.default_tax_rate);
        match calc::evaluate(is.period_end, year, &inputs) {
            Ok(p) => {
                report.series.insert(year, p.roic);
                report.periods.push(p);
            }
            Err(kind) => skip(&mut report, is.period_end, kind),
        }
    }

    report
}
