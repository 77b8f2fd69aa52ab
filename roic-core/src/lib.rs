//! roic-core
//!
//! Core traits and pure computation shared across the ROIC workspace.
//!
//! - `types`: re-exports of the DTOs from `roic-types`.
//! - `connector`: the `RoicConnector` trait and statement provider role traits.
//! - `line_items`: the line-item names the extractor understands.
//! - `extract`: per-period field extraction with ordered fallbacks.
//! - `calc`: NOPAT, invested capital and ROIC arithmetic.
//! - `align`: pairing of income-statement and balance-sheet periods.
//! - `compute`: the per-ticker pipeline producing a `SeriesReport`.
//!
//! Everything except `connector` is synchronous and free of I/O, so it can be
//! exercised directly from tests without a provider.
#![warn(missing_docs)]

/// Period pairing policies.
pub mod align;
/// ROIC arithmetic.
pub mod calc;
/// Per-ticker pipeline from statements to a report.
pub mod compute;
/// Connector capability traits and the primary `RoicConnector` interface.
pub mod connector;
/// Line-item extraction with fallbacks.
pub mod extract;
/// Line-item display names.
pub mod line_items;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
pub mod types;

pub use align::{AlignedPeriod, align_periods};
pub use compute::compute_series;
pub use connector::RoicConnector;
pub use extract::{PeriodInputs, extract_inputs};
pub use middleware::Middleware;
pub use types::*;
