use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the inflammation analysis crates.
#[derive(Error, Debug)]
pub enum InflammationError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV document was malformed.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A cell could not be interpreted as a number.
    #[error("Type error: value {value:?} at row {row}, column {column} is not numeric")]
    NonNumeric {
        row: usize,
        column: usize,
        value: String,
    },

    /// A row has a different number of cells than the rows before it.
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The data directory does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// No file in the data directory matched the file-name pattern.
    #[error("No inflammation data CSV files found in path {}", dir.display())]
    NoDataFiles { dir: PathBuf, pattern: String },

    /// The file-name pattern could not be compiled.
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A per-day reduction was requested on a table without patient rows.
    #[error("Cannot compute daily statistics of a table with no patient rows")]
    EmptyTable,

    /// Aggregation was requested over an empty sequence of tables.
    #[error("No tables to aggregate")]
    NoTables,

    /// A table's day count differs from the first table in the batch.
    #[error("Table {index} has {found} days, expected {expected}")]
    ShapeMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    /// Normalisation input contained a negative measurement.
    #[error("inflammation values should not be negative")]
    NegativeValue,

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the inflammation crates.
pub type Result<T> = std::result::Result<T, InflammationError>;
