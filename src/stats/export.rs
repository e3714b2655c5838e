//! CSV export of the statistics table.
//!
//! Output uses the same header names the importer expects, so an exported file
//! can be imported again. Fields are never quoted because the importer splits
//! lines without quote handling.

use std::io::Write;

use super::error::ImportResult;
use super::types::StatsRow;

/// Write rows as comma-separated CSV
pub fn write_csv<W: Write>(rows: &[StatsRow], writer: W) -> ImportResult<()> {
    write_csv_with_delimiter(rows, b',', writer)
}

/// Write rows as CSV with the given field delimiter
pub fn write_csv_with_delimiter<W: Write>(
    rows: &[StatsRow],
    delimiter: u8,
    writer: W,
) -> ImportResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render rows as a CSV string
pub fn to_csv_string(rows: &[StatsRow]) -> ImportResult<String> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
