//! Dataset cleaning and validation utilities.
//!
//! Everything in this module is a pure, synchronous scan over an in-memory
//! [`crate::types::Dataset`]. Mutating operations borrow the dataset for the
//! duration of the call and keep nothing afterwards; detection operations
//! return reports without touching their input.
//!
//! Malformed data never raises: unparsable cells degrade to a fallback policy
//! or get tallied in a report. Broken call contracts (a missing column, key
//! and output lists of different lengths) fail up front with a
//! [`crate::error::CleanError`].
//!
//! ## Example: coerce, dedupe, extract
//!
//! ```rust
//! use cineprep::cleaning::{coerce_numeric, extract_values, remove_blanks};
//! use cineprep::types::{Dataset, Value};
//!
//! # fn main() -> Result<(), cineprep::CleanError> {
//! let mut ds = Dataset::new(
//!     vec!["popularity".to_string(), "cast".to_string()],
//!     vec![
//!         vec![
//!             Value::Utf8("21.9".to_string()),
//!             Value::Utf8("[{'name': 'Tom Hanks'}, {'name': 'Tim Allen'}]".to_string()),
//!         ],
//!         vec![Value::Utf8("".to_string()), Value::Null],
//!     ],
//! );
//!
//! coerce_numeric(&mut ds, "popularity", None)?;
//! assert_eq!(ds.rows[0][0], Value::Float64(21.9));
//!
//! extract_values(&mut ds, "cast", &["name"], &["actor_name"])?;
//! assert_eq!(
//!     ds.rows[0][2],
//!     Value::List(vec![
//!         Value::Utf8("Tom Hanks".to_string()),
//!         Value::Utf8("Tim Allen".to_string()),
//!     ])
//! );
//!
//! let non_blank = remove_blanks(&ds, "popularity")?;
//! assert_eq!(non_blank.row_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod coerce;
pub mod duplicates;
pub mod expressions;
pub mod extract;
pub mod profile;
pub mod records;

pub use coerce::{coerce_numeric, date_pattern, fill_null_with_empty, DateFilter};
pub use duplicates::{count_blanks, count_duplicates, remove_blanks, remove_duplicates};
pub use expressions::{validate_expressions, ExpressionReport};
pub use extract::{extract_record_values, extract_values};
pub use profile::{column_type_summary, ColumnTypeSummary};
pub use records::{dedup_records, DedupOutcome};
