//! CSV loading implementation.

use std::path::Path;

use crate::error::{CleanError, CleanResult};
use crate::types::{Dataset, Value};

use super::observability::{severity_for_error, LoadContext, LoadOptions, LoadStats};

/// Load a CSV file into an in-memory [`Dataset`].
///
/// Rules:
///
/// - CSV must have headers; they become the dataset's column names.
/// - Every cell loads as text. Empty cells become missing values.
/// - Short rows are padded with missing values to the header width.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> CleanResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> CleanResult<Dataset> {
    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut row: Vec<Value> = Vec::with_capacity(columns.len());
        for idx in 0..columns.len() {
            row.push(match record.get(idx) {
                None | Some("") => Value::Null,
                Some(raw) => Value::Utf8(raw.to_string()),
            });
        }
        rows.push(row);
    }

    Ok(Dataset::new(columns, rows))
}

/// Load a CSV file, reporting the outcome to the configured observer.
///
/// When an observer is configured, this reports:
///
/// - `on_success` on success, with row/column count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
pub fn load_csv_with(path: impl AsRef<Path>, options: &LoadOptions) -> CleanResult<Dataset> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
    };

    let result = load_csv_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: ds.row_count(),
                    columns: ds.column_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}
