use thiserror::Error;

/// Convenience result type for splitter operations.
pub type SplitterResult<T> = Result<T, SplitterError>;

/// Severity classification used for observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Error-level event (the file was not split).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Error type returned by rule loading, row classification/splitting and the file I/O boundary.
///
/// Row-level variants carry the input file name and the 1-based data row number (the header is
/// row 0). The classifier and splitter create them with an empty `file` and row `0`; the driver
/// fills both in via [`SplitterError::with_location`].
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Underlying I/O error (e.g. directory not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The configuration file is not valid TOML.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed rule configuration (bad JSON, missing mandatory field, invalid pattern...).
    #[error("config error: {message}")]
    Config { message: String },

    /// A data row matched no rule.
    #[error("no rule matches {file} row {row}: {content}")]
    NoMatch {
        file: String,
        row: usize,
        content: String,
    },

    /// A date-partitioned rule matched, but the row date is outside every declared range.
    #[error(
        "date '{date}' in {file} row {row} falls outside every range of date split {config}"
    )]
    DateRange {
        file: String,
        row: usize,
        date: String,
        config: String,
    },

    /// A column selected for scaling does not hold an exact decimal number.
    #[error(
        "failed to parse decimal in {file} row {row} column {column}: {message} (raw='{raw}')"
    )]
    NumericFormat {
        file: String,
        row: usize,
        column: usize,
        raw: String,
        message: String,
    },

    /// The `dateCol` of a date-partitioned rule is beyond the end of the row.
    #[error("column {column} is out of range for {file} row {row} ({len} fields)")]
    ColumnOutOfRange {
        file: String,
        row: usize,
        column: usize,
        len: usize,
    },
}

impl SplitterError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Attach the input file name and data row number to a row-level error.
    ///
    /// Non row-level variants are returned unchanged.
    pub fn with_location(self, file_name: &str, row_number: usize) -> Self {
        match self {
            Self::NoMatch { content, .. } => Self::NoMatch {
                file: file_name.to_owned(),
                row: row_number,
                content,
            },
            Self::DateRange { date, config, .. } => Self::DateRange {
                file: file_name.to_owned(),
                row: row_number,
                date,
                config,
            },
            Self::NumericFormat {
                column,
                raw,
                message,
                ..
            } => Self::NumericFormat {
                file: file_name.to_owned(),
                row: row_number,
                column,
                raw,
                message,
            },
            Self::ColumnOutOfRange { column, len, .. } => Self::ColumnOutOfRange {
                file: file_name.to_owned(),
                row: row_number,
                column,
                len,
            },
            other => other,
        }
    }

    /// Severity of this error when reported to a [`crate::ingestion::SplitObserver`].
    pub fn severity(&self) -> Severity {
        match self {
            Self::Io(_) => Severity::Critical,
            Self::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Severity::Critical,
                _ => Severity::Error,
            },
            Self::Toml(_)
            | Self::Config { .. }
            | Self::NoMatch { .. }
            | Self::DateRange { .. }
            | Self::NumericFormat { .. }
            | Self::ColumnOutOfRange { .. } => Severity::Error,
        }
    }
}
