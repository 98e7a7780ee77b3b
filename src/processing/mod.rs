//! The rule-matching and row-splitting engine.
//!
//! - [`classify_row()`]: pick the first matching rule and resolve it to a flat split
//! - [`split_row()`]: expand a row into one scaled copy per split name
//! - [`split_records()`] / [`split_file()`]: run both over a whole file
//!
//! ## Example
//!
//! ```rust
//! use bitty_splitter::processing::split_records;
//! use bitty_splitter::rules::{RuleEntry, RuleSet};
//!
//! let rules = RuleSet::from_entries(&[RuleEntry::new(
//!     ".*",
//!     r#"{"rowsToSplit":[1],"split":{"A":"0.30","B":"0.70"}}"#,
//! )])
//! .unwrap();
//!
//! let records = vec![
//!     Ok(vec!["date".to_string(), "amount".to_string()]),
//!     Ok(vec!["2024-01-15".to_string(), "100".to_string()]),
//! ];
//! let out = split_records("ledger.csv", records, &rules).unwrap();
//!
//! assert_eq!(out.splits.get("A").unwrap()[0], vec!["2024-01-15", "30.00"]);
//! assert_eq!(out.splits.get("B").unwrap()[0], vec!["2024-01-15", "70.00"]);
//! ```

pub mod classify;
pub mod driver;
pub mod split;

pub use classify::classify_row;
pub use driver::{split_file, split_records};
pub use split::split_row;
