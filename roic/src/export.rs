use std::fmt::Write as _;
use std::io;

use roic_core::{ResultTable, RoicError};

/// Render a ratio as a percentage with two decimals; missing values as `-`.
#[must_use]
pub fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}%", v * 100.0))
}

/// Fixed-width text rendering: one row per ticker, years most recent first.
#[must_use]
pub fn render_table(table: &ResultTable) -> String {
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            table
                .years
                .iter()
                .map(|&y| format_percent(row.get(y).flatten()))
                .collect()
        })
        .collect();

    let ticker_w = table
        .symbols()
        .map(str::len)
        .chain(std::iter::once("Ticker".len()))
        .max()
        .unwrap_or(0);
    let cell_w = cells
        .iter()
        .flatten()
        .map(String::len)
        .chain(std::iter::once(4))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    let _ = write!(out, "{:<ticker_w$}", "Ticker");
    for y in &table.years {
        let _ = write!(out, "  {y:>cell_w$}");
    }
    out.push('\n');
    for (row, vals) in table.rows.iter().zip(&cells) {
        let _ = write!(out, "{:<ticker_w$}", row.symbol);
        for v in vals {
            let _ = write!(out, "  {v:>cell_w$}");
        }
        out.push('\n');
    }
    out
}

/// Write the numeric table as CSV: `Ticker,<years desc>`, raw ratios, empty
/// cells for missing values.
///
/// # Errors
/// Returns `Other` when the underlying writer fails.
pub fn write_csv<W: io::Write>(table: &ResultTable, writer: W) -> Result<(), RoicError> {
    let csv_err = |e: csv::Error| RoicError::Other(format!("csv export: {e}"));
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(table.years.len() + 1);
    header.push("Ticker".to_string());
    header.extend(table.years.iter().map(ToString::to_string));
    wtr.write_record(&header).map_err(csv_err)?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(header.len());
        record.push(row.symbol.clone());
        record.extend(
            table
                .years
                .iter()
                .map(|&y| row.get(y).flatten().map(|v| v.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&record).map_err(csv_err)?;
    }
    wtr.flush()
        .map_err(|e| RoicError::Other(format!("csv export: {e}")))
}

/// [`write_csv`] into a `String`.
///
/// # Errors
/// Returns `Other` if serialization fails.
pub fn to_csv_string(table: &ResultTable) -> Result<String, RoicError> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    String::from_utf8(buf).map_err(|e| RoicError::Other(format!("csv export: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(Some(75.0 / 650.0)), "11.54%");
        assert_eq!(format_percent(Some(-0.05)), "-5.00%");
        assert_eq!(format_percent(None), "-");
    }
}
