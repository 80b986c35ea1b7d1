use thiserror::Error;

/// Convenience result type for cleaning and query operations.
pub type CleanResult<T> = Result<T, CleanError>;

/// Error type returned across loading, cleaning, and query functions.
///
/// Malformed *data* never surfaces here: unparsable cells degrade to fallback
/// values or are tallied in reports. Only broken call contracts and I/O do.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV loading error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A named column does not exist in the dataset.
    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    /// Extraction was called with key and output-column lists of different lengths.
    #[error("keys and new_columns length must be the same (keys={keys}, new_columns={new_columns})")]
    LengthMismatch { keys: usize, new_columns: usize },

    /// A month name was not one of the twelve Spanish month names.
    #[error("unknown month name '{name}'")]
    UnknownMonth { name: String },

    /// A weekday name was not one of the seven Spanish weekday names.
    #[error("unknown weekday name '{name}'")]
    UnknownWeekday { name: String },
}
