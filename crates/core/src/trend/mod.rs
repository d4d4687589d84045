//! Revenue trend series.
//!
//! Buckets sales into one slot per calendar day or month of a period. Every
//! slot is present, zero-filled when no sale landed in it.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::TrendBucketizer;
pub use types::*;
