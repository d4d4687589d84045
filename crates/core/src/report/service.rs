//! Summary building service.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::types::{FinancialSummary, Metric, MetricValue, ReportInput};
use crate::aggregate::{Aggregation, Aggregator, AppointmentStats};
use crate::commission::CommissionStats;
use crate::comparison::{percent_change, signed_percent_change};
use crate::period::PeriodPair;
use crate::trend::TrendBucketizer;

/// Service for building financial summaries.
pub struct ReportService;

impl ReportService {
    /// Builds the summary for already fetched records.
    ///
    /// Records are first reassigned to the window holding their creation date
    /// in the salon's timezone, so every figure covers the same days as the
    /// trend. Breakdowns, the trend, and the commission and appointment
    /// statistics describe the current period only; the previous period feeds
    /// the change percentages.
    #[must_use]
    pub fn build(input: ReportInput) -> FinancialSummary {
        let ReportInput {
            salon_id,
            currency,
            tz,
            periods,
            current_sales,
            current_commissions,
            previous_sales,
            previous_commissions,
            appointments,
            warnings,
        } = input;

        let (current_sales, previous_sales) =
            by_local_date(current_sales, previous_sales, &periods, tz, |s| (s.id, s.created_at));
        let (current_commissions, previous_commissions) = by_local_date(
            current_commissions,
            previous_commissions,
            &periods,
            tz,
            |c| (c.id, c.created_at),
        );

        let current = Aggregator::aggregate(&current_sales, &current_commissions);
        let previous = Aggregator::aggregate(&previous_sales, &previous_commissions);

        let metrics = Self::compare(&current, &previous);
        let trend = TrendBucketizer::bucketize(&current_sales, &periods.current, tz);
        let commissions = CommissionStats::from_commissions(&current_commissions);
        let appointments = AppointmentStats::from_appointments(&appointments, &periods.current, tz);
        let degraded = !warnings.is_empty();

        FinancialSummary {
            salon_id,
            currency,
            periods,
            mode: current.mode,
            metrics,
            payment_methods: current.payment_methods,
            expenses_by_employee: current.expenses_by_employee,
            revenue_by_service: current.revenue_by_service,
            trend,
            commissions,
            appointments,
            warnings,
            degraded,
        }
    }

    /// Pairs every metric with its change from the previous period.
    #[must_use]
    pub fn compare(current: &Aggregation, previous: &Aggregation) -> BTreeMap<Metric, MetricValue> {
        Metric::ALL
            .iter()
            .map(|metric| {
                let value = metric.value_in(current);
                let before = metric.value_in(previous);
                let change_percent = if metric.is_signed() {
                    signed_percent_change(value, before)
                } else {
                    percent_change(value, before)
                };
                (
                    *metric,
                    MetricValue {
                        value,
                        previous: before,
                        change_percent,
                    },
                )
            })
            .collect()
    }
}

/// Splits both fetches between the windows by local creation date.
///
/// The upstream date filter ignores the salon's timezone, so records near
/// midnight can arrive in the wrong window or in neither. A record returned by
/// both fetches is kept once; records outside both windows are dropped.
fn by_local_date<T, K: Eq + Hash>(
    current: Vec<T>,
    previous: Vec<T>,
    periods: &PeriodPair,
    tz: Tz,
    key: impl Fn(&T) -> (K, DateTime<Utc>),
) -> (Vec<T>, Vec<T>) {
    let mut seen = HashSet::new();
    let mut in_current = Vec::new();
    let mut in_previous = Vec::new();

    for record in current.into_iter().chain(previous) {
        let (id, created_at) = key(&record);
        if !seen.insert(id) {
            continue;
        }
        let day = created_at.with_timezone(&tz).date_naive();
        if periods.current.contains(day) {
            in_current.push(record);
        } else if periods.previous.contains(day) {
            in_previous.push(record);
        }
    }

    (in_current, in_previous)
}
