use roic_core::{
    Capability, FinancialStatement, ResultTable, RoicError, RoicSeries, SeriesReport,
    compute_series,
};

use crate::Roic;

/// Outcome of computing several tickers for one request.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Ticker × year table, rows in request order.
    pub table: ResultTable,
    /// Per-ticker reports, same order as the table rows.
    pub reports: Vec<SeriesReport>,
}

impl Comparison {
    /// Whether no ticker produced a numeric ROIC.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.iter().all(SeriesReport::is_no_data)
    }
}

impl Roic {
    async fn fetch_statements(
        &self,
        symbol: &str,
    ) -> Result<(FinancialStatement, FinancialStatement), RoicError> {
        tokio::try_join!(self.income_statement(symbol), self.balance_sheet(symbol))
    }

    /// Compute the ROIC series for one ticker with its full outcome.
    ///
    /// Never fails: fetch errors, timeouts and invalid arguments are
    /// recorded in `SeriesReport::error` with an empty series. Successful
    /// reports are memoized per `(ticker, years)`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "roic::compute_report", skip(self))
    )]
    pub async fn compute_report(&self, symbol: &str, years: usize) -> SeriesReport {
        let symbol = symbol.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return SeriesReport::failed(symbol, RoicError::InvalidArg("empty ticker".into()));
        }
        if years == 0 {
            return SeriesReport::failed(
                symbol,
                RoicError::InvalidArg("years must be at least 1".into()),
            );
        }

        let key = (symbol.clone(), years);
        if let Some(cache) = &self.series_cache
            && let Some(hit) = cache.get(&key).await
        {
            return hit;
        }

        let fetched = Self::provider_call_with_timeout(
            "roic",
            Capability::RoicSeries.as_str(),
            self.cfg.provider_timeout,
            self.fetch_statements(&symbol),
        )
        .await;

        let report = match fetched {
            Ok((income, balance)) => compute_series(&symbol, &income, &balance, years, &self.cfg),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(symbol = %symbol, error = %e, "statement fetch failed");
                SeriesReport::failed(symbol, e)
            }
        };

        if report.error.is_none()
            && let Some(cache) = &self.series_cache
        {
            cache.insert(key, report.clone()).await;
        }
        report
    }

    /// Compute the ROIC series for one ticker.
    ///
    /// An empty series means no data; see [`Roic::compute_report`] for why.
    pub async fn compute(&self, symbol: &str, years: usize) -> RoicSeries {
        self.compute_report(symbol, years).await.series
    }

    /// Compute several tickers sequentially and widen them into a table.
    pub async fn compare<S: AsRef<str>>(&self, symbols: &[S], years: usize) -> Comparison {
        let mut reports = Vec::with_capacity(symbols.len());
        for s in symbols {
            reports.push(self.compute_report(s.as_ref(), years).await);
        }
        let table = ResultTable::from_series(reports.iter().map(|r| r.series.clone()));
        Comparison { table, reports }
    }
}
