//! Column profiling summaries.

use serde::Serialize;

use crate::error::{CleanError, CleanResult};
use crate::types::Dataset;

/// Breakdown of the value kinds present in one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnTypeSummary {
    /// Kind name and cell count, ordered by descending count.
    pub counts: Vec<(String, usize)>,
    /// Total number of rows scanned.
    pub total_rows: usize,
}

/// Count how many cells of each value kind a column holds.
///
/// Useful before coercion to see how mixed a freshly loaded column still is.
pub fn column_type_summary(dataset: &Dataset, column: &str) -> CleanResult<ColumnTypeSummary> {
    let idx = dataset
        .index_of(column)
        .ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for row in &dataset.rows {
        if let Some(value) = row.get(idx) {
            let kind = value.kind();
            match counts.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, n)) => *n += 1,
                None => counts.push((kind, 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(ColumnTypeSummary {
        counts: counts
            .into_iter()
            .map(|(k, n)| (k.to_string(), n))
            .collect(),
        total_rows: dataset.row_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::column_type_summary;
    use crate::types::{Dataset, Value};

    #[test]
    fn counts_kinds_in_descending_order() {
        let ds = Dataset::new(
            vec!["v".to_string()],
            vec![
                vec![Value::Utf8("a".to_string())],
                vec![Value::Utf8("b".to_string())],
                vec![Value::Int64(1)],
                vec![Value::Null],
                vec![Value::Utf8("c".to_string())],
            ],
        );
        let summary = column_type_summary(&ds, "v").unwrap();

        assert_eq!(summary.total_rows, 5);
        assert_eq!(summary.counts[0], ("utf8".to_string(), 3));
        assert_eq!(summary.counts.len(), 3);
    }

    #[test]
    fn missing_column_is_a_contract_error() {
        let ds = Dataset::new(vec![], vec![]);
        assert!(column_type_summary(&ds, "v").is_err());
    }
}
