//! Data transfer objects and configuration primitives shared across the ROIC workspace.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod reports;
mod series;
mod statement;
mod table;

pub use capability::Capability;
pub use config::{AlignmentPolicy, CacheConfig, DebtPolicy, RoicConfig};
pub use connector::ConnectorKey;
pub use error::RoicError;
pub use reports::{PeriodFailure, PeriodFailureKind, PeriodRoic, SeriesReport, TaxRateSource};
pub use series::RoicSeries;
pub use statement::{FinancialStatement, LineValue, StatementKind, StatementSnapshot};
pub use table::ResultTable;
