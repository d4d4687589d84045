//! Trend bucketing service.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;

use super::types::{Granularity, TimeSeries, TrendBucket};
use crate::period::Period;
use crate::period::types::first_of_month;
use crate::records::Sale;

/// Buckets sales revenue over a period.
pub struct TrendBucketizer;

impl TrendBucketizer {
    /// Buckets sales at the granularity the period length calls for.
    #[must_use]
    pub fn bucketize(sales: &[Sale], period: &Period, tz: Tz) -> TimeSeries {
        Self::bucketize_with(sales, period, tz, Granularity::for_period(period))
    }

    /// Buckets sales at an explicit granularity.
    ///
    /// Sales are placed by their creation date in `tz`; sales falling outside
    /// the period are ignored.
    #[must_use]
    pub fn bucketize_with(
        sales: &[Sale],
        period: &Period,
        tz: Tz,
        granularity: Granularity,
    ) -> TimeSeries {
        let slots: Vec<NaiveDate> = match granularity {
            Granularity::Daily => period.iter_days().collect(),
            Granularity::Monthly => period.months(),
        };

        let mut totals: BTreeMap<NaiveDate, Decimal> =
            slots.iter().map(|slot| (*slot, Decimal::ZERO)).collect();

        for sale in sales {
            let day = sale.created_at.with_timezone(&tz).date_naive();
            if !period.contains(day) {
                continue;
            }
            let slot = match granularity {
                Granularity::Daily => day,
                Granularity::Monthly => first_of_month(day),
            };
            if let Some(total) = totals.get_mut(&slot) {
                *total = total.saturating_add(sale.total_amount);
            }
        }

        let buckets = totals
            .into_iter()
            .map(|(bucket, value)| TrendBucket {
                bucket,
                label: Self::label(bucket, granularity),
                value,
            })
            .collect();

        TimeSeries {
            granularity,
            buckets,
        }
    }

    fn label(bucket: NaiveDate, granularity: Granularity) -> String {
        match granularity {
            Granularity::Daily => bucket.format("%Y-%m-%d").to_string(),
            Granularity::Monthly => bucket.format("%Y-%m").to_string(),
        }
    }
}
