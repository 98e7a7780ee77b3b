//! Per-file outcome reporting for batch runs.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Severity, SplitterError};

/// Context about one input file being split.
#[derive(Debug, Clone)]
pub struct FileContext {
    /// The input path.
    pub path: PathBuf,
}

/// Minimal stats reported on a successful split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    /// Data rows read (header excluded).
    pub data_rows: usize,
    /// Number of split output files written.
    pub splits: usize,
}

/// Observer interface for per-file outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait SplitObserver: Send + Sync {
    /// Called when a file was split and all of its outputs were written.
    fn on_success(&self, _ctx: &FileContext, _stats: FileStats) {}

    /// Called when a file could not be split or written.
    fn on_failure(&self, _ctx: &FileContext, _severity: Severity, _error: &SplitterError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn SplitObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn SplitObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl SplitObserver for CompositeObserver {
    fn on_success(&self, ctx: &FileContext, stats: FileStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &FileContext, severity: Severity, error: &SplitterError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }
}

/// Emits per-file outcomes as `tracing` events.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl SplitObserver for TracingObserver {
    fn on_success(&self, ctx: &FileContext, stats: FileStats) {
        tracing::info!(
            path = %ctx.path.display(),
            data_rows = stats.data_rows,
            splits = stats.splits,
            "file split"
        );
    }

    fn on_failure(&self, ctx: &FileContext, severity: Severity, error: &SplitterError) {
        tracing::error!(
            path = %ctx.path.display(),
            severity = ?severity,
            error = %error,
            "file skipped"
        );
    }
}
