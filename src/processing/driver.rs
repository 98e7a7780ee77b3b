//! Per-file orchestration: header capture, classify + split of each data row, accumulation.

use std::path::Path;

use crate::error::{SplitterError, SplitterResult};
use crate::ingestion::csv::read_rows_from_path;
use crate::rules::RuleSet;
use crate::types::{FileSplit, Row, SplitResult};

use super::classify::classify_row;
use super::split::split_row;

/// Split already-read records of the file named `file_name`.
///
/// The first record is the header. Every following record is classified and split; produced
/// rows are appended to their split in input order. Data rows are numbered from 1.
///
/// Any failure aborts the whole file; the returned error carries the file name and row number.
pub fn split_records<I>(file_name: &str, records: I, rules: &RuleSet) -> SplitterResult<FileSplit>
where
    I: IntoIterator<Item = SplitterResult<Row>>,
{
    let mut records = records.into_iter();
    let header = records.next().transpose()?.unwrap_or_default();

    let mut splits = SplitResult::new();
    let mut data_rows = 0;
    for (idx0, record) in records.enumerate() {
        let row_number = idx0 + 1;
        let row = record?;

        let produced = classify_row(&row, file_name, rules)
            .and_then(|split| split_row(&row, split))
            .map_err(|e| {
                tracing::error!(
                    file = file_name,
                    row = row_number,
                    content = ?row,
                    "failed to split row"
                );
                e.with_location(file_name, row_number)
            })?;

        tracing::debug!(rows = ?produced, "produced rows");
        splits.extend(produced);
        data_rows = row_number;
    }

    Ok(FileSplit {
        file_name: file_name.to_owned(),
        header,
        splits,
        data_rows,
    })
}

/// Read the CSV file at `path` and split it with `rules`.
///
/// The output file name is the input file's name without its directory.
pub fn split_file(path: impl AsRef<Path>, rules: &RuleSet) -> SplitterResult<FileSplit> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            SplitterError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("input path has no usable file name: {}", path.display()),
            ))
        })?;

    tracing::info!(path = %path.display(), "opening file");
    let rows = read_rows_from_path(path)?;
    split_records(file_name, rows.into_iter().map(Ok), rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleEntry;

    fn rules(entries: &[(&str, &str)]) -> RuleSet {
        let entries: Vec<_> = entries
            .iter()
            .map(|(pattern, spec)| RuleEntry::new(*pattern, *spec))
            .collect();
        RuleSet::from_entries(&entries).unwrap()
    }

    fn records(rows: &[&[&str]]) -> Vec<SplitterResult<Row>> {
        rows.iter()
            .map(|r| Ok(r.iter().map(|f| f.to_string()).collect()))
            .collect()
    }

    #[test]
    fn header_is_not_split() {
        let rules = rules(&[(".*", r#"{"rowsToSplit":[1],"split":{"A":"0.5"}}"#)]);
        let out = split_records(
            "in.csv",
            records(&[&["date", "amount"], &["2024-01-01", "10"], &["2024-01-02", "4"]]),
            &rules,
        )
        .unwrap();

        assert_eq!(out.header, vec!["date", "amount"]);
        assert_eq!(out.data_rows, 2);
        assert_eq!(
            out.splits.get("A").unwrap(),
            &[
                vec!["2024-01-01".to_string(), "5.0".to_string()],
                vec!["2024-01-02".to_string(), "2.0".to_string()],
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_splits() {
        let rules = rules(&[(".*", r#"{"rowsToSplit":[],"split":{"A":"1"}}"#)]);
        let out = split_records("in.csv", Vec::new(), &rules).unwrap();
        assert!(out.header.is_empty());
        assert!(out.splits.is_empty());
    }

    #[test]
    fn failure_is_located_by_data_row_number() {
        let rules = rules(&[("ok", r#"{"rowsToSplit":[],"split":{"A":"1"}}"#)]);
        let err = split_records(
            "in.csv",
            records(&[&["h"], &["ok"], &["ok"], &["bad"]]),
            &rules,
        )
        .unwrap_err();

        match err {
            SplitterError::NoMatch { file, row, content } => {
                assert_eq!(file, "in.csv");
                assert_eq!(row, 3);
                assert_eq!(content, "bad");
            }
            other => panic!("expected NoMatch, got {other:?}"),
        }
    }
}
