//! Financial summary generation.
//!
//! This module joins the other core modules into one report:
//! - `RecordFetcher`: the async boundary records are read through
//! - `ReportService`: pure summary building from fetched records
//! - `ReportPipeline`: salon resolution, concurrent fetches, degraded-source
//!   recovery and cancellation

pub mod error;
pub mod fetcher;
pub mod pipeline;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use fetcher::{FetchError, RecordFetcher};
pub use pipeline::{ReportPipeline, ReportRequest};
pub use service::ReportService;
pub use types::*;
