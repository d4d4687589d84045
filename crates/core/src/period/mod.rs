//! Reporting periods.
//!
//! This module turns named ranges (`today`, `week`, `last30days`, ...) or
//! explicit bounds into inclusive calendar-date windows, and pairs every
//! window with the adjacent previous window of the same length.

pub mod error;
pub mod resolver;
pub mod types;


pub use error::PeriodError;
pub use resolver::{DateRangeResolver, ReportClock};
pub use types::*;
