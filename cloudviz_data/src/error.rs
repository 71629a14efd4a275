// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load errors.

use thiserror::Error;

/// Errors raised while loading a time series.
///
/// Row numbers count data rows from 1; the header line is not counted.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be read.
    #[error("failed to read time series: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself is malformed.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header.
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    /// A `date` cell is neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    #[error("row {row}: invalid date `{value}`")]
    InvalidDate {
        /// Data row number.
        row: usize,
        /// Offending cell.
        value: String,
    },

    /// A `close` cell is not a finite number.
    #[error("row {row}: invalid close `{value}`")]
    InvalidClose {
        /// Data row number.
        row: usize,
        /// Offending cell.
        value: String,
    },

    /// A `close` value is negative.
    #[error("row {row}: negative close {value}")]
    NegativeClose {
        /// Data row number.
        row: usize,
        /// Offending value.
        value: f64,
    },

    /// A date is earlier than the one on the previous row.
    #[error("row {row}: date is earlier than the previous row")]
    OutOfOrder {
        /// Data row number.
        row: usize,
    },
}

/// Result alias for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;
