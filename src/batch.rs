//! Batch runs over an input directory.
//!
//! Files are processed one at a time in file-name order. A file is fully split in memory before
//! any of its outputs are written, so a file that fails to split writes nothing. A failing file
//! is reported and skipped; the rest of the batch still runs.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{SplitterError, SplitterResult};
use crate::ingestion::{
    discover_input_files, CompositeObserver, FileContext, FileStats, SplitObserver,
    TracingObserver,
};
use crate::output::write_file_split;
use crate::processing::split_file;
use crate::rules::RuleSet;

/// Options controlling a batch run.
#[derive(Clone)]
pub struct BatchOptions {
    /// Receives per-file outcomes.
    pub observer: Arc<dyn SplitObserver>,
}

impl fmt::Debug for BatchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchOptions").finish_non_exhaustive()
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            observer: Arc::new(TracingObserver),
        }
    }
}

impl BatchOptions {
    /// Report to `observer` in addition to the default `tracing` events.
    pub fn with_observer(observer: Arc<dyn SplitObserver>) -> Self {
        Self {
            observer: Arc::new(CompositeObserver::new(vec![
                Arc::new(TracingObserver),
                observer,
            ])),
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Input files whose splits were all written.
    pub succeeded: Vec<PathBuf>,
    /// Input files that were skipped, with the reason.
    pub failed: Vec<(PathBuf, SplitterError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Split every input file directly inside `input_dir` into `output_dir`.
///
/// Only a failure to list `input_dir` is returned as an error; per-file failures are collected
/// in the [`BatchReport`].
pub fn run_batch(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    rules: &RuleSet,
    options: &BatchOptions,
) -> SplitterResult<BatchReport> {
    let output_dir = output_dir.as_ref();
    let mut report = BatchReport::default();

    for path in discover_input_files(input_dir)? {
        let ctx = FileContext { path: path.clone() };
        match process_file(&path, output_dir, rules) {
            Ok(stats) => {
                options.observer.on_success(&ctx, stats);
                report.succeeded.push(path);
            }
            Err(e) => {
                options.observer.on_failure(&ctx, e.severity(), &e);
                report.failed.push((path, e));
            }
        }
    }

    Ok(report)
}

fn process_file(path: &Path, output_dir: &Path, rules: &RuleSet) -> SplitterResult<FileStats> {
    let file_split = split_file(path, rules)?;
    let written = write_file_split(output_dir, &file_split)?;
    Ok(FileStats {
        data_rows: file_split.data_rows,
        splits: written.len(),
    })
}
