//! Error types for the cyto-features library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Missing column '{0}' in profile")]
    MissingColumn(String),

    /// The denylist table lacks its mandatory column. The message text is a
    /// contract with downstream tooling and must not change.
    #[error("one column must be named 'blacklist'")]
    MissingBlacklistColumn,

    #[error("provide valid compartment. One of: {valid:?} (got '{given}')")]
    InvalidCompartment {
        given: String,
        valid: &'static [&'static str],
    },
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, FeatureError>;
