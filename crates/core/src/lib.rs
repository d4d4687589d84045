//! Core reporting logic for SalonLedger.
//!
//! This crate turns raw salon records into dashboard figures. It has no web
//! or HTTP client dependencies; records come in through the `RecordFetcher`
//! trait.
//!
//! # Modules
//!
//! - `period` - Named and custom reporting windows
//! - `records` - Sale, commission and appointment records
//! - `aggregate` - Totals, breakdowns and appointment counts
//! - `trend` - Daily and monthly revenue series
//! - `comparison` - Period-over-period percentage change
//! - `commission` - Payable totals and bulk payment selection
//! - `report` - Summary building and the fetch pipeline

pub mod aggregate;
pub mod commission;
pub mod comparison;
pub mod period;
pub mod records;
pub mod report;
pub mod trend;

#[cfg(test)]
mod fixtures;
