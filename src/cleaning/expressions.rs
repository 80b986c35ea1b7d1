//! Literal-expression validation over text columns.

use serde::Serialize;

use crate::error::{CleanError, CleanResult};
use crate::literal::parse_literal;
use crate::types::{Dataset, Value};

/// Report of a validation pass over one column.
///
/// `invalid_count` is the total of everything that is not a valid literal:
/// missing cells, blank strings, and parse failures. Parse failures are
/// additionally counted in `error_count` with their raw text collected in
/// `error_values`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpressionReport {
    /// Cells that parsed as a literal expression.
    pub valid_count: usize,
    /// Cells that did not: missing + blank + parse failures.
    pub invalid_count: usize,
    /// Missing cells.
    pub nan_count: usize,
    /// Empty-string cells.
    pub blank_count: usize,
    /// Cells whose text failed to parse.
    pub error_count: usize,
    /// Raw text of every cell counted in `error_count`, in row order.
    pub error_values: Vec<String>,
}

/// Classify each value of a column as a valid literal expression, blank,
/// missing, or malformed.
///
/// Cells that are no longer text (already-coerced numbers, lists, records)
/// count as missing: there is no expression text left to validate. No parse
/// failure ever escapes this function.
pub fn validate_expressions(dataset: &Dataset, column: &str) -> CleanResult<ExpressionReport> {
    let idx = dataset
        .index_of(column)
        .ok_or_else(|| CleanError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut report = ExpressionReport::default();
    for row in &dataset.rows {
        match row.get(idx) {
            Some(Value::Utf8(s)) if s.is_empty() => {
                report.blank_count += 1;
                report.invalid_count += 1;
            }
            Some(Value::Utf8(s)) => match parse_literal(s) {
                Ok(_) => report.valid_count += 1,
                Err(_) => {
                    report.invalid_count += 1;
                    report.error_count += 1;
                    report.error_values.push(s.clone());
                }
            },
            _ => {
                report.nan_count += 1;
                report.invalid_count += 1;
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::validate_expressions;
    use crate::types::{Dataset, Value};

    fn column_dataset(values: Vec<Value>) -> Dataset {
        Dataset::new(
            vec!["genres".to_string()],
            values.into_iter().map(|v| vec![v]).collect(),
        )
    }

    fn utf8(s: &str) -> Value {
        Value::Utf8(s.to_string())
    }

    #[test]
    fn classifies_valid_blank_missing_and_malformed() {
        let ds = column_dataset(vec![
            utf8("1"),
            utf8(""),
            Value::Null,
            utf8("[1,2]"),
            utf8("not_valid("),
        ]);
        let report = validate_expressions(&ds, "genres").unwrap();

        assert_eq!(report.valid_count, 2);
        assert_eq!(report.blank_count, 1);
        assert_eq!(report.nan_count, 1);
        assert_eq!(report.error_count, 1);
        assert_eq!(report.invalid_count, 3);
        assert_eq!(report.error_values, vec!["not_valid(".to_string()]);
    }

    #[test]
    fn accepts_the_literal_forms_the_tables_use() {
        let ds = column_dataset(vec![
            utf8("[{'id': 16, 'name': 'Animation'}]"),
            utf8("{'name': 'Pixar'}"),
            utf8("('en', 'es')"),
            utf8("None"),
            utf8("True"),
        ]);
        let report = validate_expressions(&ds, "genres").unwrap();
        assert_eq!(report.valid_count, 5);
        assert_eq!(report.invalid_count, 0);
    }

    #[test]
    fn error_values_keep_row_order() {
        let ds = column_dataset(vec![utf8("}{"), utf8("ok'"), utf8("3")]);
        let report = validate_expressions(&ds, "genres").unwrap();
        assert_eq!(
            report.error_values,
            vec!["}{".to_string(), "ok'".to_string()]
        );
    }

    #[test]
    fn non_text_cells_count_as_missing() {
        let ds = column_dataset(vec![Value::Int64(5), Value::List(vec![])]);
        let report = validate_expressions(&ds, "genres").unwrap();
        assert_eq!(report.nan_count, 2);
        assert_eq!(report.invalid_count, 2);
        assert_eq!(report.valid_count, 0);
    }

    #[test]
    fn empty_column_yields_empty_report() {
        let ds = column_dataset(vec![]);
        let report = validate_expressions(&ds, "genres").unwrap();
        assert_eq!(report.valid_count, 0);
        assert_eq!(report.invalid_count, 0);
        assert!(report.error_values.is_empty());
    }

    #[test]
    fn missing_column_is_a_contract_error() {
        let ds = column_dataset(vec![utf8("1")]);
        assert!(validate_expressions(&ds, "nope").is_err());
    }
}
