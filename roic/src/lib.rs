//! Compute Return on Invested Capital (ROIC) per fiscal year for a list of
//! tickers, from income statements and balance sheets supplied by pluggable
//! connectors.
//!
//! Overview
//! - Connectors implement the `roic_core` provider traits; several may be
//!   registered and are tried in registration order per statement.
//! - Both statement fetches for one ticker share a single deadline
//!   (`RoicConfig::provider_timeout`); a timeout counts as a failed fetch.
//! - Computed series are memoized per `(ticker, years)` inside the `Roic`
//!   instance. Failed fetches are not memoized.
//! - Per-ticker failures never propagate: they are recorded on the
//!   [`SeriesReport`] and the ticker gets an empty series.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use roic::{Roic, parse_tickers};
//! use roic_yfinance::YfConnector;
//!
//! let yf = YfConnector::cached()?.build();
//! let roic = Roic::builder().with_connector(yf).build()?;
//! let cmp = roic.compare(&parse_tickers("V, MSFT"), 5).await;
//! print!("{}", roic::render_table(&cmp.table));
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod export;
mod input;
mod router;
mod series;

pub use crate::core::{Roic, RoicBuilder};
pub use export::{format_percent, render_table, to_csv_string, write_csv};
pub use input::{DEFAULT_TICKERS, DEFAULT_YEARS, MAX_YEARS, MIN_YEARS, parse_tickers};
pub use router::util::collapse_errors;
pub use series::Comparison;

pub use roic_middleware::{CacheMiddleware, ConnectorBuilder};

// Re-export core types for convenience
pub use roic_core::{
    AlignmentPolicy, CacheConfig, Capability, DebtPolicy, FinancialStatement, PeriodFailure,
    PeriodFailureKind, PeriodRoic, ResultTable, RoicConfig, RoicConnector, RoicError,
    RoicSeries, SeriesReport, StatementKind, StatementSnapshot, TaxRateSource,
};
