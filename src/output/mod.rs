//! Output side of the file boundary.
//!
//! Each split of a [`FileSplit`] is written to `<output_dir>/<split>/<file_name>`: the original
//! header followed by that split's rows.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SplitterResult;
use crate::types::{FileSplit, Row};

/// Destination path of `split` for the input file named `file_name`.
pub fn split_output_path(output_dir: &Path, split: &str, file_name: &str) -> PathBuf {
    output_dir.join(split).join(file_name)
}

/// Write every split of `file_split` under `output_dir`, creating directories as needed.
///
/// Returns the written paths in split-name order.
pub fn write_file_split(
    output_dir: impl AsRef<Path>,
    file_split: &FileSplit,
) -> SplitterResult<Vec<PathBuf>> {
    let output_dir = output_dir.as_ref();
    let mut written = Vec::with_capacity(file_split.splits.len());

    for (split, rows) in file_split.splits.iter() {
        fs::create_dir_all(output_dir.join(split))?;
        let path = split_output_path(output_dir, split, &file_split.file_name);
        tracing::info!(path = %path.display(), rows = rows.len(), "writing to file");
        write_rows(&path, &file_split.header, rows)?;
        written.push(path);
    }
    Ok(written)
}

/// Write `header` followed by `rows` as CSV to `path`, replacing any existing file.
pub fn write_rows(path: impl AsRef<Path>, header: &[String], rows: &[Row]) -> SplitterResult<()> {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
