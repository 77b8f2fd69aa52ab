use std::collections::HashSet;

/// Tickers compared when the user supplies none.
pub const DEFAULT_TICKERS: &str = "V, MSFT, GOOGL, AAPL";
/// Default number of fiscal years.
pub const DEFAULT_YEARS: usize = 5;
/// Smallest accepted number of years at the CLI.
pub const MIN_YEARS: usize = 2;
/// Largest accepted number of years at the CLI.
pub const MAX_YEARS: usize = 10;

/// Split a comma-separated ticker list.
///
/// Entries are trimmed and upper-cased; empty entries are dropped and
/// duplicates keep their first position.
#[must_use]
pub fn parse_tickers(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split(',')
        .map(|t| t.trim().to_ascii_uppercase())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
