//! Parsing of the JSON split-spec blobs attached to each rule.
//!
//! Schema (keys are case-sensitive):
//!
//! ```json
//! {
//!   "rowsToSplit": [1, 3],
//!   "split": {"A": "0.30", "B": "0.70"},
//!   "file": "ledger.csv",
//!   "dateCol": 0,
//!   "dateSplit": {
//!     "h1": {"DateEnd": "2024-06-30", "split": {"A": "1"}},
//!     "h2": {"DateStart": "2024-06-30", "split": {"B": "1"}}
//!   }
//! }
//! ```
//!
//! `rowsToSplit` is mandatory. A spec with `dateSplit` is date-partitioned and needs `dateCol`;
//! otherwise `split` is required.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{SplitterError, SplitterResult};
use crate::types::{DateRange, DateSplit, Partition, SplitSpec, SplitWeights};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSplitSpec {
    rows_to_split: Option<Vec<usize>>,
    split: Option<Map<String, Value>>,
    date_split: Option<Map<String, Value>>,
    date_col: Option<usize>,
    file: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDateSplit {
    #[serde(rename = "DateStart")]
    start: Option<String>,
    #[serde(rename = "DateEnd")]
    end: Option<String>,
    split: Map<String, Value>,
}

/// Parse one split-spec JSON blob.
///
/// Fails with [`SplitterError::Config`] if the blob is not valid JSON or violates the schema.
pub fn parse_split_spec(json: &str) -> SplitterResult<SplitSpec> {
    let raw: RawSplitSpec = serde_json::from_str(json)
        .map_err(|e| SplitterError::config(format!("invalid split spec JSON: {e}")))?;

    let rows_to_split = raw.rows_to_split.ok_or_else(|| {
        SplitterError::config("split spec is missing mandatory field 'rowsToSplit'")
    })?;

    let partition = match raw.date_split {
        Some(date_split) => {
            let date_col = raw.date_col.ok_or_else(|| {
                SplitterError::config("split spec with 'dateSplit' is missing 'dateCol'")
            })?;
            let ranges = date_split
                .into_iter()
                .map(|(key, value)| parse_date_split(key, value))
                .collect::<SplitterResult<Vec<_>>>()?;
            Partition::ByDate { date_col, ranges }
        }
        None => {
            let split = raw.split.ok_or_else(|| {
                SplitterError::config("split spec needs either 'split' or 'dateSplit'")
            })?;
            Partition::Flat(parse_weights(split)?)
        }
    };

    Ok(SplitSpec {
        rows_to_split,
        file: raw.file,
        partition,
    })
}

fn parse_date_split(key: String, value: Value) -> SplitterResult<DateSplit> {
    let raw: RawDateSplit = serde_json::from_value(value)
        .map_err(|e| SplitterError::config(format!("invalid dateSplit entry '{key}': {e}")))?;
    Ok(DateSplit {
        range: DateRange {
            start: raw.start,
            end: raw.end,
        },
        weights: parse_weights(raw.split)?,
        key,
    })
}

fn parse_weights(split: Map<String, Value>) -> SplitterResult<SplitWeights> {
    let entries = split
        .into_iter()
        .map(|(name, value)| {
            let weight = parse_weight(&value).ok_or_else(|| {
                SplitterError::config(format!(
                    "weight for split '{name}' is not a decimal number: {value}"
                ))
            })?;
            Ok((name, weight))
        })
        .collect::<SplitterResult<Vec<_>>>()?;
    Ok(SplitWeights::new(entries))
}

/// Weights may be JSON strings (`"0.30"`) or JSON numbers; both keep their literal digits.
fn parse_weight(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
