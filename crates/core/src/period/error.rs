//! Period error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while resolving a reporting period.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Unrecognized period token.
    #[error("Unknown period: {0}")]
    UnknownToken(String),

    /// Custom selection with only one bound.
    #[error("Custom period requires both start and end dates")]
    IncompleteBounds,
}
