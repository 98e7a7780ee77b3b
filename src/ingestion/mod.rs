//! Input side of the file boundary.
//!
//! - [`csv`]: read a CSV file as raw text rows (header included)
//! - [`discovery`]: list the input files of a directory
//! - [`observability`]: per-file outcome observers used by [`crate::batch`]

pub mod csv;
pub mod discovery;
pub mod observability;

pub use discovery::discover_input_files;
pub use observability::{CompositeObserver, FileContext, FileStats, SplitObserver, TracingObserver};
