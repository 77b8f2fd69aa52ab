//! Re-export of foundational types from `roic-types`.
// Consolidated re-exports so downstream crates can depend on `roic-core` only

pub use roic_types::{
    AlignmentPolicy, CacheConfig, Capability, ConnectorKey, DebtPolicy, FinancialStatement,
    LineValue, PeriodFailure, PeriodFailureKind, PeriodRoic, ResultTable, RoicConfig, RoicError,
    RoicSeries, SeriesReport, StatementKind, StatementSnapshot, TaxRateSource,
};
