//! Tests for trend bucketing.

use chrono::{Datelike, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::fixtures::{date, sale};
use crate::period::{DateRangeResolver, Period, PeriodToken};
use crate::records::PaymentMethod;

proptest! {
    /// Daily series always have one bucket per calendar day, and the bucket
    /// values add up to the revenue of in-period sales.
    #[test]
    fn test_daily_bucket_count_and_total(
        len in 1u64..=90,
        offsets in prop::collection::vec((0i64..120, 1i64..100_000), 0..40),
    ) {
        let start = date(2026, 1, 1);
        let end = start + chrono::Duration::days(i64::try_from(len).unwrap() - 1);
        let period = Period::custom(start, end).unwrap();
        let sales: Vec<_> = offsets
            .iter()
            .map(|(off, amount)| {
                sale(Decimal::from(*amount), PaymentMethod::Cash, start + chrono::Duration::days(*off))
            })
            .collect();

        let series = TrendBucketizer::bucketize(&sales, &period, chrono_tz::UTC);

        prop_assert_eq!(series.granularity, Granularity::Daily);
        prop_assert_eq!(series.len() as u64, period.days());
        let expected: Decimal = sales
            .iter()
            .filter(|s| period.contains(s.created_at.date_naive()))
            .map(|s| s.total_amount)
            .sum();
        prop_assert_eq!(series.total(), expected);
        for pair in series.buckets.windows(2) {
            prop_assert!(pair[0].bucket < pair[1].bucket);
        }
    }

    /// Monthly series have one bucket per overlapping calendar month.
    #[test]
    fn test_monthly_bucket_count(start_off in 0i64..365, len in 91i64..1000) {
        let start = date(2025, 1, 1) + chrono::Duration::days(start_off);
        let end = start + chrono::Duration::days(len - 1);
        let period = Period::custom(start, end).unwrap();

        let series = TrendBucketizer::bucketize(&[], &period, chrono_tz::UTC);

        prop_assert_eq!(series.granularity, Granularity::Monthly);
        let months = (end.year() - start.year()) * 12
            + i32::try_from(end.month()).unwrap()
            - i32::try_from(start.month()).unwrap()
            + 1;
        prop_assert_eq!(series.len(), usize::try_from(months).unwrap());
        prop_assert!(series.buckets.iter().all(|b| b.value.is_zero()));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_last7days_with_three_active_days() {
        let today = date(2026, 10, 16);
        let period = DateRangeResolver::resolve(PeriodToken::Last7Days, today);
        let sales = vec![
            sale(dec!(1000), PaymentMethod::Cash, date(2026, 10, 10)),
            sale(dec!(500), PaymentMethod::Card, date(2026, 10, 10)),
            sale(dec!(2000), PaymentMethod::Cash, date(2026, 10, 13)),
            sale(dec!(750), PaymentMethod::MobileMoney, date(2026, 10, 16)),
        ];

        let series = TrendBucketizer::bucketize(&sales, &period, chrono_tz::UTC);

        assert_eq!(series.len(), 7);
        assert_eq!(series.buckets.iter().filter(|b| b.value.is_zero()).count(), 4);
        assert_eq!(series.buckets[0].value, dec!(1500));
        assert_eq!(series.buckets[0].label, "2026-10-10");
        assert_eq!(series.buckets[3].value, dec!(2000));
        assert_eq!(series.buckets[6].value, dec!(750));
    }

    #[test]
    fn test_ninety_days_is_still_daily() {
        let period = DateRangeResolver::resolve(PeriodToken::Last90Days, date(2026, 10, 16));
        let series = TrendBucketizer::bucketize(&[], &period, chrono_tz::UTC);

        assert_eq!(series.granularity, Granularity::Daily);
        assert_eq!(series.len(), 90);
    }

    #[test]
    fn test_this_year_is_monthly_with_partial_month() {
        let period = DateRangeResolver::resolve(PeriodToken::ThisYear, date(2026, 10, 16));
        let sales = vec![
            sale(dec!(100), PaymentMethod::Cash, date(2026, 1, 1)),
            sale(dec!(200), PaymentMethod::Cash, date(2026, 1, 31)),
            sale(dec!(300), PaymentMethod::Cash, date(2026, 10, 16)),
        ];

        let series = TrendBucketizer::bucketize(&sales, &period, chrono_tz::UTC);

        assert_eq!(series.granularity, Granularity::Monthly);
        assert_eq!(series.len(), 10);
        assert_eq!(series.buckets[0].label, "2026-01");
        assert_eq!(series.buckets[0].value, dec!(300));
        assert_eq!(series.buckets[9].bucket, date(2026, 10, 1));
        assert_eq!(series.buckets[9].value, dec!(300));
        assert_eq!(series.buckets.iter().filter(|b| b.value.is_zero()).count(), 8);
    }

    #[test]
    fn test_sales_outside_period_are_ignored() {
        let period = Period::custom(date(2026, 10, 10), date(2026, 10, 12)).unwrap();
        let sales = vec![
            sale(dec!(100), PaymentMethod::Cash, date(2026, 10, 9)),
            sale(dec!(200), PaymentMethod::Cash, date(2026, 10, 11)),
            sale(dec!(400), PaymentMethod::Cash, date(2026, 10, 13)),
        ];

        let series = TrendBucketizer::bucketize(&sales, &period, chrono_tz::UTC);

        assert_eq!(series.len(), 3);
        assert_eq!(series.total(), dec!(200));
    }

    #[test]
    fn test_bucket_uses_local_date() {
        let period = Period::custom(date(2026, 10, 15), date(2026, 10, 16)).unwrap();
        let mut late = sale(dec!(100), PaymentMethod::Cash, date(2026, 10, 15));
        // 23:00 UTC on the 15th is 01:00 on the 16th in Kigali.
        late.created_at = Utc.with_ymd_and_hms(2026, 10, 15, 23, 0, 0).unwrap();

        let utc = TrendBucketizer::bucketize(std::slice::from_ref(&late), &period, chrono_tz::UTC);
        let kigali = TrendBucketizer::bucketize(&[late], &period, chrono_tz::Africa::Kigali);

        assert_eq!(utc.buckets[0].value, dec!(100));
        assert_eq!(kigali.buckets[0].value, Decimal::ZERO);
        assert_eq!(kigali.buckets[1].value, dec!(100));
    }

    #[test]
    fn test_explicit_monthly_granularity_on_short_period() {
        let period = Period::custom(date(2026, 9, 25), date(2026, 10, 5)).unwrap();
        let sales = vec![
            sale(dec!(10), PaymentMethod::Cash, date(2026, 9, 30)),
            sale(dec!(20), PaymentMethod::Cash, date(2026, 10, 1)),
        ];

        let series =
            TrendBucketizer::bucketize_with(&sales, &period, chrono_tz::UTC, Granularity::Monthly);

        assert_eq!(series.len(), 2);
        assert_eq!(series.buckets[0].value, dec!(10));
        assert_eq!(series.buckets[1].value, dec!(20));
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        let day = date(2026, 10, 16);
        let period = Period::single_day(day);
        let sales = vec![
            sale(Decimal::MAX, PaymentMethod::Cash, day),
            sale(Decimal::MAX, PaymentMethod::Card, day),
        ];

        let series = TrendBucketizer::bucketize(&sales, &period, chrono_tz::UTC);

        assert_eq!(series.buckets[0].value, Decimal::MAX);
        assert_eq!(series.total(), Decimal::MAX);
    }
}
