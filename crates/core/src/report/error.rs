//! Report error types.

use salonledger_shared::AppError;
use thiserror::Error;

use super::fetcher::FetchError;
use crate::period::PeriodError;

/// Errors that abort report generation.
///
/// A failing record source is not one of them; it degrades the summary
/// instead.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No salon was named and the caller has none.
    #[error("No salon available")]
    NoSalonAvailable,

    /// The requested period is invalid.
    #[error(transparent)]
    Period(#[from] PeriodError),

    /// A listing that is the whole result failed.
    #[error("Record source failed: {0}")]
    Source(#[from] FetchError),

    /// The request was cancelled before the fetches completed.
    #[error("Report cancelled")]
    Cancelled,
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::NoSalonAvailable => Self::NoSalonAvailable,
            ReportError::Period(e) => Self::Validation(e.to_string()),
            ReportError::Source(FetchError::Status {
                status: 401 | 403, ..
            }) => Self::Unauthorized("upstream rejected the caller's token".to_string()),
            ReportError::Source(e) => Self::Upstream(e.to_string()),
            ReportError::Cancelled => Self::Unavailable("report cancelled".to_string()),
        }
    }
}
