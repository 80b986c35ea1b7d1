//! Core data model types.
//!
//! Movie tables load into an in-memory [`Dataset`]: ordered rows of
//! dynamically-typed [`Value`] cells under named columns. Cells start life as
//! text (or missing) straight out of CSV; the [`crate::cleaning`] layer is
//! what turns them into numbers, lists, and records.

/// A single dynamically-typed cell value in a [`Dataset`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
    /// Ordered sequence of values (e.g. one key's extracted sequence).
    List(Vec<Value>),
    /// String-keyed mapping parsed from a nested textual encoding.
    ///
    /// Keys keep their textual order; duplicate keys are not collapsed.
    Record(Vec<(String, Value)>),
}

impl Value {
    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for missing values and empty strings.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Utf8(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Borrow the string content, if this is a string cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Borrow the record entries, if this is a record.
    pub fn as_record(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Record(entries) => Some(entries.as_slice()),
            _ => None,
        }
    }

    /// Absent-safe key lookup.
    ///
    /// Returns `None` both when the key is absent and when the value is not a
    /// record at all, so malformed entries compare as non-matching instead of
    /// failing.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Record(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Read the cell as a float: numeric cells directly, string cells by
    /// parsing. Anything else is `None`.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            Value::Utf8(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Short name of the value's kind, for profiling summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int64(_) => "int64",
            Value::Float64(_) => "float64",
            Value::Bool(_) => "bool",
            Value::Utf8(_) => "utf8",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as `columns`. Row
/// identity is positional and preserved by in-place column updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl Dataset {
    /// Create a dataset from column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the dataset.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Clone a column out of the dataset, aligned by row index.
    pub fn column_values(&self, name: &str) -> Option<Vec<Value>> {
        let idx = self.index_of(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).cloned().unwrap_or(Value::Null))
                .collect(),
        )
    }

    /// Replace a column in place with an equally long sequence of values.
    ///
    /// Returns `false` if the column does not exist.
    ///
    /// # Panics
    ///
    /// Panics if `values` has a different length than the dataset's row count.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) -> bool {
        let Some(idx) = self.index_of(name) else {
            return false;
        };
        assert!(
            values.len() == self.rows.len(),
            "column length {} does not match row count {}",
            values.len(),
            self.rows.len()
        );
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[idx] = value;
        }
        true
    }

    /// Add a column filled with `fill` for every row.
    ///
    /// If a column with that name already exists, its cells are overwritten.
    pub fn add_column(&mut self, name: &str, fill: Value) {
        match self.index_of(name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = fill.clone();
                }
            }
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.push(fill.clone());
                }
            }
        }
    }

    /// Create a new dataset containing only rows that match `predicate`.
    ///
    /// The returned dataset preserves the original column order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Remove the rows at the given positions, preserving the relative order
    /// of the survivors. Out-of-range and repeated indices are ignored.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        if indices.is_empty() {
            return;
        }
        let mut drop = vec![false; self.rows.len()];
        for &idx in indices {
            if let Some(flag) = drop.get_mut(idx) {
                *flag = true;
            }
        }
        let mut keep = drop.iter().map(|d| !d);
        self.rows.retain(|_| keep.next().unwrap_or(true));
    }
}

#[cfg(test)]
mod tests {
    use super::{Dataset, Value};

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec!["id".to_string(), "title".to_string()],
            vec![
                vec![Value::Utf8("1".to_string()), Value::Utf8("Alien".to_string())],
                vec![Value::Utf8("2".to_string()), Value::Null],
                vec![Value::Utf8("3".to_string()), Value::Utf8("Heat".to_string())],
            ],
        )
    }

    #[test]
    fn index_of_finds_columns() {
        let ds = sample_dataset();
        assert_eq!(ds.index_of("id"), Some(0));
        assert_eq!(ds.index_of("title"), Some(1));
        assert_eq!(ds.index_of("missing"), None);
    }

    #[test]
    fn column_values_aligns_by_row() {
        let ds = sample_dataset();
        let titles = ds.column_values("title").unwrap();
        assert_eq!(
            titles,
            vec![
                Value::Utf8("Alien".to_string()),
                Value::Null,
                Value::Utf8("Heat".to_string()),
            ]
        );
        assert!(ds.column_values("missing").is_none());
    }

    #[test]
    fn set_column_replaces_in_place() {
        let mut ds = sample_dataset();
        let replaced = ds.set_column(
            "id",
            vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)],
        );
        assert!(replaced);
        assert_eq!(ds.rows[1][0], Value::Int64(2));
        // Other columns untouched.
        assert_eq!(ds.rows[0][1], Value::Utf8("Alien".to_string()));
    }

    #[test]
    fn add_column_fills_every_row_and_overwrites_existing() {
        let mut ds = sample_dataset();
        ds.add_column("year", Value::Null);
        assert_eq!(ds.column_count(), 3);
        assert!(ds.rows.iter().all(|row| row[2] == Value::Null));

        ds.add_column("title", Value::Utf8("x".to_string()));
        assert_eq!(ds.column_count(), 3);
        assert!(ds.rows.iter().all(|row| row[1] == Value::Utf8("x".to_string())));
    }

    #[test]
    fn remove_rows_keeps_survivor_order() {
        let mut ds = sample_dataset();
        ds.remove_rows(&[1, 7, 1]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.rows[0][0], Value::Utf8("1".to_string()));
        assert_eq!(ds.rows[1][0], Value::Utf8("3".to_string()));
    }

    #[test]
    fn record_get_is_absent_safe() {
        let record = Value::Record(vec![("name".to_string(), Value::Utf8("Tom".to_string()))]);
        assert_eq!(record.get("name"), Some(&Value::Utf8("Tom".to_string())));
        assert_eq!(record.get("job"), None);
        assert_eq!(Value::Utf8("not a record".to_string()).get("name"), None);
    }

    #[test]
    fn to_f64_reads_numeric_and_text_cells() {
        assert_eq!(Value::Int64(3).to_f64(), Some(3.0));
        assert_eq!(Value::Float64(1.5).to_f64(), Some(1.5));
        assert_eq!(Value::Utf8(" 2.25 ".to_string()).to_f64(), Some(2.25));
        assert_eq!(Value::Utf8("n/a".to_string()).to_f64(), None);
        assert_eq!(Value::Null.to_f64(), None);
    }
}
