//! Station loading error types.

use crate::domain::{InvalidStationCode, TimeError};

/// Errors that can occur when loading the station file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("cannot read station file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid delimited data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record carries a malformed station code
    #[error("record {record}: {source}")]
    InvalidCode {
        record: usize,
        #[source]
        source: InvalidStationCode,
    },

    /// A record carries an unparseable opening date
    #[error("record {record}: opening date {value:?}: {source}")]
    InvalidDate {
        record: usize,
        value: String,
        #[source]
        source: TimeError,
    },
}
