//! Core data model types for splitting.
//!
//! Input files are read as raw text [`Row`]s. Each data row is classified against a
//! [`crate::rules::RuleSet`] into a [`ResolvedSplit`], expanded into one row per split name, and
//! accumulated into a [`SplitResult`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;

/// An ordered sequence of textual field values.
pub type Row = Vec<String>;

/// The first row of an input file: ordered column names.
pub type Header = Vec<String>;

/// Date bounds for one sub-split of a date-partitioned rule.
///
/// Bounds are compared as plain strings, so ISO-8601 dates (`YYYY-MM-DD`) order correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Exclusive lower bound (`DateStart`). `None` means unbounded.
    pub start: Option<String>,
    /// Inclusive upper bound (`DateEnd`). `None` means unbounded.
    pub end: Option<String>,
}

impl DateRange {
    /// Create a range from optional bounds.
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(str::to_owned),
            end: end.map(str::to_owned),
        }
    }

    /// Returns `true` if `start < date <= end`, treating absent bounds as open.
    pub fn contains(&self, date: &str) -> bool {
        let after_start = self.start.as_deref().is_none_or(|start| date > start);
        let before_end = self.end.as_deref().is_none_or(|end| date <= end);
        after_start && before_end
    }
}

/// Split names and their exact decimal weights, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitWeights {
    entries: Vec<(String, Decimal)>,
}

impl SplitWeights {
    /// Create weights from `(name, weight)` pairs.
    pub fn new(entries: Vec<(String, Decimal)>) -> Self {
        Self { entries }
    }

    /// Iterate `(name, weight)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(name, weight)| (name.as_str(), *weight))
    }

    /// Iterate split names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Weight for `name`, if present.
    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, weight)| *weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One named sub-split of a date-partitioned rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSplit {
    /// Sub-key as declared under `dateSplit`.
    pub key: String,
    pub range: DateRange,
    pub weights: SplitWeights,
}

/// How a rule chooses its weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partition {
    /// A single fixed mapping from split name to weight.
    Flat(SplitWeights),
    /// Choose among several weight mappings by the date found in `date_col`.
    ByDate {
        /// Zero-based index of the column holding the row date.
        date_col: usize,
        /// Sub-splits in declaration order; the first containing range wins.
        ranges: Vec<DateSplit>,
    },
}

/// Parsed split specification of one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSpec {
    /// Zero-based indices of the columns scaled by the split weight (`rowsToSplit`).
    pub rows_to_split: Vec<usize>,
    /// Restricts the rule to input files with exactly this name.
    pub file: Option<String>,
    pub partition: Partition,
}

impl SplitSpec {
    /// Returns `true` if this spec applies to files named `file_name`.
    pub fn applies_to_file(&self, file_name: &str) -> bool {
        self.file.as_deref().is_none_or(|f| f == file_name)
    }
}

/// A concrete flat split chosen for one row: weights plus the columns to scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSplit<'a> {
    pub weights: &'a SplitWeights,
    pub rows_to_split: &'a [usize],
}

/// Accumulated output rows of one input file, keyed by split name.
///
/// Rows of each split keep the order in which their source rows appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResult {
    splits: BTreeMap<String, Vec<Row>>,
}

impl SplitResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one produced row to the list of `split`.
    pub fn push(&mut self, split: impl Into<String>, row: Row) {
        self.splits.entry(split.into()).or_default().push(row);
    }

    /// Append every `(split, row)` pair produced for a single source row.
    pub fn extend<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = (String, Row)>,
    {
        for (split, row) in rows {
            self.push(split, row);
        }
    }

    /// Rows accumulated for `split`, if any.
    pub fn get(&self, split: &str) -> Option<&[Row]> {
        self.splits.get(split).map(Vec::as_slice)
    }

    /// Iterate split names in sorted order.
    pub fn split_names(&self) -> impl Iterator<Item = &str> {
        self.splits.keys().map(String::as_str)
    }

    /// Iterate `(split, rows)` in sorted split-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Row])> {
        self.splits
            .iter()
            .map(|(name, rows)| (name.as_str(), rows.as_slice()))
    }

    /// Number of distinct splits.
    pub fn len(&self) -> usize {
        self.splits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    /// Total number of produced rows across all splits.
    pub fn row_count(&self) -> usize {
        self.splits.values().map(Vec::len).sum()
    }
}

/// Result of splitting one input file: its header plus the per-split rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSplit {
    /// Input file name (no directory), reused as the output file name.
    pub file_name: String,
    pub header: Header,
    pub splits: SplitResult,
    /// Number of data rows read (header excluded).
    pub data_rows: usize,
}
