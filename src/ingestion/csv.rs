//! CSV reading as raw text rows.

use std::path::Path;

use crate::error::SplitterResult;
use crate::types::Row;

/// Read every record of a CSV file as raw text.
///
/// Rules:
///
/// - The header is **not** interpreted; it is returned as the first row.
/// - Rows may have differing lengths.
/// - Field values are kept as-is (no trimming, no typing).
pub fn read_rows_from_path(path: impl AsRef<Path>) -> SplitterResult<Vec<Row>> {
    let mut rdr = reader_builder().from_path(path)?;
    read_rows_from_reader(&mut rdr)
}

/// Read every record from an existing CSV reader.
pub fn read_rows_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> SplitterResult<Vec<Row>> {
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

/// Reader settings used for input files.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}
