//! Numeric coercion and date-pattern checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CleanError, CleanResult};
use crate::types::{Dataset, Value};

/// Convert the values of a column to numeric type, in place.
///
/// Every string cell is parsed as an integer first, then as a float.
/// Cells that cannot be converted become `fallback` when one is given;
/// otherwise they keep the value originally present in that row. Missing
/// cells become `fallback` when one is given, otherwise stay missing.
///
/// The column never changes length and no new columns are created.
/// Unparsable values never fail; only a missing column does.
pub fn coerce_numeric(
    dataset: &mut Dataset,
    column: &str,
    fallback: Option<Value>,
) -> CleanResult<()> {
    let idx = dataset
        .index_of(column)
        .ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
        })?;

    for row in &mut dataset.rows {
        let cell = &mut row[idx];
        let coerced = match cell {
            // Already numeric, nothing to do.
            Value::Int64(_) | Value::Float64(_) => continue,
            Value::Utf8(s) => parse_number(s),
            Value::Bool(b) => Some(Value::Int64(i64::from(*b))),
            Value::Null | Value::List(_) | Value::Record(_) => None,
        };
        match coerced {
            Some(v) => *cell = v,
            None => {
                if let Some(fb) = &fallback {
                    *cell = fb.clone();
                }
            }
        }
    }
    Ok(())
}

/// Parse a trimmed string as an integer, falling back to float.
fn parse_number(s: &str) -> Option<Value> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Value::Int64(i));
    }
    trimmed.parse::<f64>().ok().map(Value::Float64)
}

/// Which side of a date-pattern check to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// Values that start with a `yyyy-mm-dd` date.
    Matching,
    /// Values that do not.
    NonMatching,
}

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("date pattern compiles"));

/// Split a column's values by the `yyyy-mm-dd` date pattern.
///
/// The check is anchored at the start of the text only, so a date followed by
/// extra characters still matches. Non-text cells never match.
pub fn date_pattern(values: &[Value], filter: DateFilter) -> Vec<Value> {
    values
        .iter()
        .filter(|v| {
            let matches = v.as_str().is_some_and(|s| DATE_RE.is_match(s));
            match filter {
                DateFilter::Matching => matches,
                DateFilter::NonMatching => !matches,
            }
        })
        .cloned()
        .collect()
}

/// Replace missing cells of a column with empty strings, in place.
pub fn fill_null_with_empty(dataset: &mut Dataset, column: &str) -> CleanResult<()> {
    let idx = dataset
        .index_of(column)
        .ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
        })?;
    for row in &mut dataset.rows {
        if row[idx].is_null() {
            row[idx] = Value::Utf8(String::new());
        }
    }
    Ok(())
}
