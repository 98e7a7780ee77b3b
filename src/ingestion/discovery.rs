//! Input file discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{SplitterError, SplitterResult};

/// List the regular files directly inside `dir` (non-recursive), sorted by file name.
pub fn discover_input_files(dir: impl AsRef<Path>) -> SplitterResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    tracing::info!(dir = %dir.display(), "getting files from directory");

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| match e.into_io_error() {
            Some(io) => SplitterError::Io(io),
            None => SplitterError::Io(std::io::Error::other(format!(
                "failed to walk {}",
                dir.display()
            ))),
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    tracing::debug!(files = ?files, "found files");
    Ok(files)
}
