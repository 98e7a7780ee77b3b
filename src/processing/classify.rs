//! Row classification: pick the acting rule for a row and resolve it to a flat split.

use crate::error::{SplitterError, SplitterResult};
use crate::rules::{Rule, RuleSet};
use crate::types::{Partition, ResolvedSplit};

/// Resolve the flat split that applies to `row` of the file named `file_name`.
///
/// Rules are tried in declaration order against the comma-joined row text. A pattern match on
/// a rule whose `file` filter names another file does not count, and the search continues. The
/// first accepted rule is final:
///
/// - a flat rule yields its weights directly;
/// - a date-partitioned rule yields the first sub-split whose range contains the row's date, or
///   fails with [`SplitterError::DateRange`].
///
/// Fails with [`SplitterError::NoMatch`] if no rule accepts the row. Errors carry no file/row
/// location; see [`SplitterError::with_location`].
pub fn classify_row<'r>(
    row: &[String],
    file_name: &str,
    rules: &'r RuleSet,
) -> SplitterResult<ResolvedSplit<'r>> {
    let row_text = row.join(",");
    tracing::debug!(row = %row_text, "classifying row");

    let rule = rules
        .iter()
        .filter(|rule| rule.pattern.is_match(&row_text))
        .find(|rule| rule.spec.applies_to_file(file_name))
        .ok_or_else(|| SplitterError::NoMatch {
            file: String::new(),
            row: 0,
            content: row_text.clone(),
        })?;

    tracing::info!(pattern = rule.pattern.as_str(), "match found");
    resolve(row, rule)
}

fn resolve<'r>(row: &[String], rule: &'r Rule) -> SplitterResult<ResolvedSplit<'r>> {
    let rows_to_split = rule.spec.rows_to_split.as_slice();
    match &rule.spec.partition {
        Partition::Flat(weights) => Ok(ResolvedSplit {
            weights,
            rows_to_split,
        }),
        Partition::ByDate { date_col, ranges } => {
            let date = row
                .get(*date_col)
                .ok_or_else(|| SplitterError::ColumnOutOfRange {
                    file: String::new(),
                    row: 0,
                    column: *date_col,
                    len: row.len(),
                })?;

            ranges
                .iter()
                .find(|split| split.range.contains(date))
                .map(|split| {
                    tracing::debug!(date = %date, sub_split = %split.key, "date range selected");
                    ResolvedSplit {
                        weights: &split.weights,
                        rows_to_split,
                    }
                })
                .ok_or_else(|| SplitterError::DateRange {
                    file: String::new(),
                    row: 0,
                    date: date.clone(),
                    config: format!(
                        "'{}' [{}]",
                        rule.pattern.as_str(),
                        ranges
                            .iter()
                            .map(|split| split.key.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                })
        }
    }
}
