use std::path::PathBuf;

use thiserror::Error;

/// Result type for table generation.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that abort a table generation run.
///
/// Every variant is fatal: no row is ever skipped.
#[derive(Debug, Error)]
pub enum TableError {
    /// The input CSV could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row is short or holds a field that is not a finite number.
    #[error("row {row}: {message}")]
    Parse { row: usize, message: String },

    /// `X + Y + Z` is not positive, so chromaticity is undefined.
    #[error("row {row}: X + Y + Z = {sum} at {wavelength} nm, chromaticity is undefined")]
    DegenerateRow {
        row: usize,
        wavelength: f64,
        sum: f64,
    },

    /// Strict mode only: wavelengths must increase row over row.
    #[error("row {row}: wavelength {current} nm does not follow {previous} nm")]
    NonMonotonic {
        row: usize,
        previous: f64,
        current: f64,
    },

    /// Failure while writing the generated table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
