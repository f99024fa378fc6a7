//! Error types for matrix validation and statistics.

use thiserror::Error;

/// Errors produced while building, parsing, or summarizing a matrix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixStatsError {
    /// The input does not hold exactly `ROWS * COLS` values.
    #[error("invalid input size: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Required element count
        expected: usize,
        /// Element count that was supplied
        actual: usize,
    },

    /// An element is NaN or infinite.
    #[error("invalid value at index {index}: {value} is not a finite number")]
    InvalidValue {
        /// Flat (row-major) index of the offending element
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Dimensions passed to the sequence builder cannot describe a matrix.
    #[error("invalid matrix shape {rows}x{cols}: dimensions must be positive and their product must fit in memory")]
    InvalidShape {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// A token of text input is not a number.
    #[error("non-numeric value at index {index}: {token:?}")]
    Parse {
        /// Position of the token in the input
        index: usize,
        /// The token as written
        token: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatrixStatsError>;
