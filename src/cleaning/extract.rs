//! Nested-value extraction into new columns.

use crate::cleaning::records::dedup_records;
use crate::error::{CleanError, CleanResult};
use crate::literal::parse_literal;
use crate::types::{Dataset, Value};

/// Extract values from a column of encoded record lists into new columns.
///
/// `keys` and `new_columns` pair up positionally and must have equal length;
/// on mismatch the call fails before touching the dataset. The new columns
/// are created missing-initialized, then for every row the source cell is
/// parsed as a literal: a list is used as-is, a single record is treated as a
/// one-element list. Parsed records are deduplicated by `keys` (first kept),
/// and each key's collected sequence — missing where a record lacks the key —
/// lands as a list in the matching new column.
///
/// Rows whose cell is missing, fails to parse, or parses to something other
/// than a list or record keep missing cells in every new column.
pub fn extract_values(
    dataset: &mut Dataset,
    column: &str,
    keys: &[&str],
    new_columns: &[&str],
) -> CleanResult<()> {
    let src_idx = check_contract(dataset, column, keys, new_columns)?;

    for name in new_columns {
        dataset.add_column(name, Value::Null);
    }
    let out_idxs: Vec<usize> = new_columns
        .iter()
        .map(|name| dataset.index_of(name).expect("column just added"))
        .collect();

    for row_idx in 0..dataset.rows.len() {
        let parsed = dataset.rows[row_idx]
            .get(src_idx)
            .and_then(Value::as_str)
            .and_then(|text| parse_literal(text).ok());

        let items = match parsed {
            Some(Value::List(items)) => items,
            Some(record @ Value::Record(_)) => vec![record],
            _ => continue,
        };
        let deduped = dedup_records(items, keys, true).records;

        for (key, &out_idx) in keys.iter().zip(&out_idxs) {
            let collected: Vec<Value> = deduped
                .iter()
                .map(|item| item.get(key).cloned().unwrap_or(Value::Null))
                .collect();
            dataset.rows[row_idx][out_idx] = Value::List(collected);
        }
    }
    Ok(())
}

/// Extract values from a column of single encoded records into new columns.
///
/// Same pairing contract as [`extract_values`]. Each found key yields a
/// one-element list in its new column; rows whose cell is not a record, or
/// whose record carries none of the requested keys, keep missing cells in
/// every new column.
pub fn extract_record_values(
    dataset: &mut Dataset,
    column: &str,
    keys: &[&str],
    new_columns: &[&str],
) -> CleanResult<()> {
    let src_idx = check_contract(dataset, column, keys, new_columns)?;

    for name in new_columns {
        dataset.add_column(name, Value::Null);
    }
    let out_idxs: Vec<usize> = new_columns
        .iter()
        .map(|name| dataset.index_of(name).expect("column just added"))
        .collect();

    for row_idx in 0..dataset.rows.len() {
        let parsed = dataset.rows[row_idx]
            .get(src_idx)
            .and_then(Value::as_str)
            .and_then(|text| parse_literal(text).ok());

        let Some(record @ Value::Record(_)) = parsed else {
            continue;
        };

        let mut collected: Vec<Value> = Vec::with_capacity(keys.len());
        let mut any_found = false;
        for key in keys {
            match record.get(key) {
                Some(v) if !v.is_null() => {
                    any_found = true;
                    collected.push(Value::List(vec![v.clone()]));
                }
                _ => collected.push(Value::Null),
            }
        }
        if !any_found {
            continue;
        }
        for (&out_idx, value) in out_idxs.iter().zip(collected) {
            dataset.rows[row_idx][out_idx] = value;
        }
    }
    Ok(())
}

fn check_contract(
    dataset: &Dataset,
    column: &str,
    keys: &[&str],
    new_columns: &[&str],
) -> CleanResult<usize> {
    if keys.len() != new_columns.len() {
        return Err(CleanError::LengthMismatch {
            keys: keys.len(),
            new_columns: new_columns.len(),
        });
    }
    dataset
        .index_of(column)
        .ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
        })
}
