//! `bitty-splitter` partitions the rows of CSV files into several output files using an ordered
//! list of pattern-matched rules, scaling designated numeric columns by exact decimal weights.
//!
//! ## How a row is split
//!
//! 1. The row's fields are joined with `,` and matched against each rule's regex (anchored at
//!    the start of the text) in declaration order. The first rule that matches, and whose
//!    optional `file` filter accepts the current file name, is applied.
//! 2. A flat rule carries one `split` mapping (split name → weight). A date-partitioned rule
//!    carries several, each bounded by `DateStart` (exclusive) and `DateEnd` (inclusive); the
//!    first range containing the row's date (column `dateCol`) is chosen.
//! 3. For every split name one copy of the row is produced. Columns in `rowsToSplit` are
//!    multiplied by the split weight using [`rust_decimal::Decimal`]; other columns are copied
//!    verbatim.
//!
//! A row that matches no rule, a date outside every range, or a non-numeric scaled column
//! aborts the whole file.
//!
//! ## Quick example
//!
//! ```rust
//! use bitty_splitter::processing::split_records;
//! use bitty_splitter::rules::{RuleEntry, RuleSet};
//!
//! # fn main() -> Result<(), bitty_splitter::SplitterError> {
//! let rules = RuleSet::from_entries(&[
//!     RuleEntry::new("2024-", r#"{"rowsToSplit":[1],"split":{"A":"0.30","B":"0.70"}}"#),
//!     RuleEntry::new(".*", r#"{"rowsToSplit":[],"split":{"rest":"1"}}"#),
//! ])?;
//!
//! let records = vec![
//!     Ok(vec!["date".to_string(), "amount".to_string()]),
//!     Ok(vec!["2024-01-15".to_string(), "100".to_string()]),
//!     Ok(vec!["2023-12-31".to_string(), "8".to_string()]),
//! ];
//! let out = split_records("ledger.csv", records, &rules)?;
//!
//! assert_eq!(out.splits.get("A").unwrap()[0], vec!["2024-01-15", "30.00"]);
//! assert_eq!(out.splits.get("rest").unwrap()[0], vec!["2023-12-31", "8"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`rules`]: rule entries, compiled patterns and split-spec parsing
//! - [`processing`]: row classification, row splitting and per-file driving
//! - [`types`]: rows, split specifications and split results
//! - [`ingestion`] / [`output`]: CSV reading, input discovery and split file writing
//! - [`config`]: configuration file model
//! - [`batch`]: directory-level runs with per-file failure isolation
//! - [`cli`]: command-line surface used by the `bitty-splitter` binary
//! - [`error`]: error type shared across the crate

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod output;
pub mod processing;
pub mod rules;
pub mod types;

pub use error::{Severity, SplitterError, SplitterResult};
