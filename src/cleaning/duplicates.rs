//! Duplicate and blank detection over columns.

use crate::error::{CleanError, CleanResult};
use crate::types::{Dataset, Value};

/// Tally values that appear more than once in a column.
///
/// Each value's first occurrence does not count as a duplicate: a value seen
/// three times reports a count of 2. The result is ordered by descending
/// count; values seen once are absent.
pub fn count_duplicates(values: &[Value]) -> Vec<(Value, usize)> {
    let mut occurrences: Vec<(&Value, usize)> = Vec::new();
    for value in values {
        match occurrences.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => occurrences.push((value, 1)),
        }
    }

    let mut counts: Vec<(Value, usize)> = occurrences
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(v, n)| (v.clone(), n - 1))
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Return a dataset keeping only the first row for each distinct value of
/// `column`; later rows with an already-seen value are dropped. Relative
/// order among kept rows is preserved and the input is left untouched.
pub fn remove_duplicates(dataset: &Dataset, column: &str) -> CleanResult<Dataset> {
    let idx = dataset
        .index_of(column)
        .ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut seen: Vec<Value> = Vec::new();
    Ok(dataset.filter_rows(|row| {
        let value = row.get(idx).cloned().unwrap_or(Value::Null);
        if seen.contains(&value) {
            false
        } else {
            seen.push(value);
            true
        }
    }))
}

/// Count rows whose `column` value is missing or an empty string.
pub fn count_blanks(dataset: &Dataset, column: &str) -> CleanResult<usize> {
    let idx = dataset
        .index_of(column)
        .ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
        })?;

    Ok(dataset
        .rows
        .iter()
        .filter(|row| row.get(idx).is_none_or(Value::is_blank))
        .count())
}

/// Return a dataset without the rows whose `column` value is missing or an
/// empty string. The input is left untouched.
pub fn remove_blanks(dataset: &Dataset, column: &str) -> CleanResult<Dataset> {
    let idx = dataset
        .index_of(column)
        .ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
        })?;

    Ok(dataset.filter_rows(|row| !row.get(idx).is_none_or(Value::is_blank)))
}
