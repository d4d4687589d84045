//! Trend data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::saturating_sum;
use crate::period::Period;

/// Longest period, in days, that is bucketed per day.
pub const DAILY_BUCKET_LIMIT: u64 = 90;

/// Width of one trend bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per calendar day.
    Daily,
    /// One bucket per calendar month.
    Monthly,
}

impl Granularity {
    /// Daily up to 90 days, monthly beyond.
    #[must_use]
    pub fn for_period(period: &Period) -> Self {
        if period.days() <= DAILY_BUCKET_LIMIT {
            Self::Daily
        } else {
            Self::Monthly
        }
    }
}

/// One slot of a trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendBucket {
    /// First day of the slot.
    pub bucket: NaiveDate,
    /// Display label (`2026-10-16` or `2026-10`).
    pub label: String,
    /// Revenue in the slot.
    pub value: Decimal,
}

/// Chronological, gap-free revenue series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeries {
    /// Bucket width.
    pub granularity: Granularity,
    /// Buckets, oldest first.
    pub buckets: Vec<TrendBucket>,
}

impl TimeSeries {
    /// Sum over all buckets.
    #[must_use]
    pub fn total(&self) -> Decimal {
        saturating_sum(self.buckets.iter().map(|b| b.value))
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if the series has no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
