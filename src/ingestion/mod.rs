//! CSV loading into an in-memory [`crate::types::Dataset`].
//!
//! The movie tables ship as CSV exports with named columns. Loading is
//! deliberately untyped: every cell comes in as text (empty cells as
//! missing), and the [`crate::cleaning`] layer decides what becomes a
//! number, a list, or a record.
//!
//! Use [`load_csv_from_path`] directly, or [`load_csv_with`] to report
//! success/failure/alerts to a [`LoadObserver`].

pub mod csv;
pub mod observability;

pub use csv::{load_csv_from_path, load_csv_from_reader, load_csv_with};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadOptions, LoadSeverity,
    LoadStats, StdErrObserver,
};
