//! Row splitting: expand one row into one scaled copy per split name.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{SplitterError, SplitterResult};
use crate::types::{ResolvedSplit, Row};

/// Produce one output row per split name of `split`.
///
/// Columns listed in `rows_to_split` are parsed as exact decimals and multiplied by the split
/// weight; the product is written with its natural scale (e.g. `100 * 0.30 = "30.00"`). All
/// other columns are copied verbatim. Indices beyond the end of the row are ignored.
///
/// Fails with [`SplitterError::NumericFormat`] if a scaled column is not a decimal number or
/// the product cannot be represented exactly (overflow, or more than 28 fractional digits).
pub fn split_row(
    row: &[String],
    split: ResolvedSplit<'_>,
) -> SplitterResult<BTreeMap<String, Row>> {
    tracing::info!(split = ?split.weights, "applying split");

    let scaled = row
        .iter()
        .enumerate()
        .filter(|(idx, _)| split.rows_to_split.contains(idx))
        .map(|(idx, raw)| parse_decimal(idx, raw).map(|value| (idx, value)))
        .collect::<SplitterResult<Vec<_>>>()?;

    let mut out = BTreeMap::new();
    for (name, weight) in split.weights.iter() {
        let mut new_row = row.to_vec();
        for &(idx, value) in &scaled {
            let product = exact_product(value, weight).map_err(|reason| {
                SplitterError::NumericFormat {
                    file: String::new(),
                    row: 0,
                    column: idx,
                    raw: row[idx].clone(),
                    message: format!("{reason} multiplying by weight {weight} of split '{name}'"),
                }
            })?;
            new_row[idx] = product.to_string();
        }
        out.insert(name.to_owned(), new_row);
    }
    Ok(out)
}

/// `rust_decimal` rounds products past 28 fractional digits instead of failing.
fn exact_product(value: Decimal, weight: Decimal) -> Result<Decimal, &'static str> {
    let product = value.checked_mul(weight).ok_or("overflow")?;
    let needed_scale = value.normalize().scale() + weight.normalize().scale();
    if product.scale() < needed_scale {
        return Err("precision loss");
    }
    Ok(product)
}

fn parse_decimal(column: usize, raw: &str) -> SplitterResult<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|e| Decimal::from_scientific(trimmed).map_err(|_| e))
        .map_err(|e| SplitterError::NumericFormat {
            file: String::new(),
            row: 0,
            column,
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SplitWeights;

    fn weights(pairs: &[(&str, &str)]) -> SplitWeights {
        SplitWeights::new(
            pairs
                .iter()
                .map(|(name, w)| (name.to_string(), Decimal::from_str(w).unwrap()))
                .collect(),
        )
    }

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn scales_selected_columns_exactly() {
        let weights = weights(&[("A", "0.30"), ("B", "0.70")]);
        let out = split_row(
            &row(&["2024-01-15", "100"]),
            ResolvedSplit {
                weights: &weights,
                rows_to_split: &[1],
            },
        )
        .unwrap();

        assert_eq!(out["A"], row(&["2024-01-15", "30.00"]));
        assert_eq!(out["B"], row(&["2024-01-15", "70.00"]));
    }

    #[test]
    fn avoids_binary_float_drift() {
        let weights = weights(&[("third", "0.1")]);
        let out = split_row(
            &row(&["0.2", "keep"]),
            ResolvedSplit {
                weights: &weights,
                rows_to_split: &[0],
            },
        )
        .unwrap();
        assert_eq!(out["third"], row(&["0.02", "keep"]));
    }

    #[test]
    fn unscaled_columns_are_copied_verbatim() {
        let weights = weights(&[("only", "1")]);
        let input = row(&[" 12 ", "text, with comma", "7"]);
        let out = split_row(
            &input,
            ResolvedSplit {
                weights: &weights,
                rows_to_split: &[],
            },
        )
        .unwrap();
        assert_eq!(out["only"], input);
    }

    #[test]
    fn out_of_range_scale_columns_are_ignored() {
        let weights = weights(&[("A", "2")]);
        let out = split_row(
            &row(&["3"]),
            ResolvedSplit {
                weights: &weights,
                rows_to_split: &[0, 9],
            },
        )
        .unwrap();
        assert_eq!(out["A"], row(&["6"]));
    }

    #[test]
    fn product_beyond_28_fractional_digits_fails() {
        let weights = weights(&[("A", "0.0000000000001")]);
        let err = split_row(
            &row(&["0.0000000000000001"]),
            ResolvedSplit {
                weights: &weights,
                rows_to_split: &[0],
            },
        )
        .unwrap_err();

        match err {
            SplitterError::NumericFormat { column, message, .. } => {
                assert_eq!(column, 0);
                assert!(message.contains("precision loss"), "{message}");
            }
            other => panic!("expected NumericFormat, got {other:?}"),
        }
    }

    #[test]
    fn trailing_zeros_do_not_count_as_precision_loss() {
        let weights = weights(&[("A", "0.50000000000000")]);
        let out = split_row(
            &row(&["2.000000000000000000"]),
            ResolvedSplit {
                weights: &weights,
                rows_to_split: &[0],
            },
        )
        .unwrap();
        assert_eq!(out["A"][0].parse::<Decimal>().unwrap(), Decimal::ONE);
    }

    #[test]
    fn non_numeric_scale_column_fails() {
        let weights = weights(&[("A", "0.5")]);
        let err = split_row(
            &row(&["2024-01-15", "n/a"]),
            ResolvedSplit {
                weights: &weights,
                rows_to_split: &[1],
            },
        )
        .unwrap_err();

        match err {
            SplitterError::NumericFormat { column, raw, .. } => {
                assert_eq!(column, 1);
                assert_eq!(raw, "n/a");
            }
            other => panic!("expected NumericFormat, got {other:?}"),
        }
    }
}
