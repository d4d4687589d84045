//! Report data types.

use std::collections::BTreeMap;

use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use salonledger_shared::types::{Currency, SalonId};

use crate::aggregate::{Aggregation, AppointmentStats, BreakdownEntry, ProfitMode};
use crate::commission::CommissionStats;
use crate::period::PeriodPair;
use crate::records::{Appointment, Commission, Sale};
use crate::trend::TimeSeries;

/// Headline figures compared against the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Sum of sale totals.
    Revenue,
    /// Accrued commissions.
    Expenses,
    /// Revenue minus expenses.
    NetIncome,
    /// Net income over revenue.
    ProfitMargin,
    /// Number of sales.
    SalesCount,
    /// Revenue per sale.
    AverageSale,
    /// Number of commissions.
    CommissionCount,
}

impl Metric {
    /// Every metric, in display order.
    pub const ALL: [Self; 7] = [
        Self::Revenue,
        Self::Expenses,
        Self::NetIncome,
        Self::ProfitMargin,
        Self::SalesCount,
        Self::AverageSale,
        Self::CommissionCount,
    ];

    /// Returns true for metrics that can go negative.
    ///
    /// Their change is measured against the magnitude of the previous value
    /// so a loss shrinking toward zero reads as an improvement.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::NetIncome | Self::ProfitMargin)
    }

    /// Reads the metric from an aggregation.
    #[must_use]
    pub fn value_in(self, aggregation: &Aggregation) -> Decimal {
        match self {
            Self::Revenue => aggregation.revenue,
            Self::Expenses => aggregation.expenses,
            Self::NetIncome => aggregation.net_income,
            Self::ProfitMargin => aggregation.profit_margin,
            Self::SalesCount => Decimal::from(aggregation.sales_count),
            Self::AverageSale => aggregation.average_sale,
            Self::CommissionCount => Decimal::from(aggregation.commission_count),
        }
    }
}

/// A metric's current value and its change from the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricValue {
    /// Value in the current period.
    pub value: Decimal,
    /// Value in the previous period.
    pub previous: Decimal,
    /// Percentage change, two decimal places.
    pub change_percent: Decimal,
}

/// Kind of record a source provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// Sales listing.
    Sales,
    /// Commission listing.
    Commissions,
    /// Appointment listing.
    Appointments,
}

/// Which period a source was fetched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    /// The reported period.
    Current,
    /// The comparison period.
    Previous,
}

/// A record source that failed and was treated as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceWarning {
    /// Failed source.
    pub source: RecordSource,
    /// Period it was fetched for.
    pub window: Window,
    /// Failure description.
    pub message: String,
}

/// Dashboard summary for one salon and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Salon reported on.
    pub salon_id: SalonId,
    /// Salon currency.
    pub currency: Currency,
    /// Reported and comparison periods.
    pub periods: PeriodPair,
    /// Profit or loss in the current period.
    pub mode: ProfitMode,
    /// Headline figures with period-over-period change.
    pub metrics: BTreeMap<Metric, MetricValue>,
    /// Revenue by payment method.
    pub payment_methods: Vec<BreakdownEntry>,
    /// Commission expenses by employee.
    pub expenses_by_employee: Vec<BreakdownEntry>,
    /// Revenue by service or product.
    pub revenue_by_service: Vec<BreakdownEntry>,
    /// Revenue over time.
    pub trend: TimeSeries,
    /// Paid and unpaid commission totals.
    pub commissions: CommissionStats,
    /// Booking counts.
    pub appointments: AppointmentStats,
    /// Sources that failed and were treated as empty.
    pub warnings: Vec<SourceWarning>,
    /// True when any source failed.
    pub degraded: bool,
}

impl FinancialSummary {
    /// Current value of a metric, zero if absent.
    #[must_use]
    pub fn value(&self, metric: Metric) -> Decimal {
        self.metrics
            .get(&metric)
            .map_or(Decimal::ZERO, |m| m.value)
    }

    /// Change percentage of a metric, zero if absent.
    #[must_use]
    pub fn change(&self, metric: Metric) -> Decimal {
        self.metrics
            .get(&metric)
            .map_or(Decimal::ZERO, |m| m.change_percent)
    }
}

/// Everything a summary is computed from.
#[derive(Debug, Clone)]
pub struct ReportInput {
    /// Salon reported on.
    pub salon_id: SalonId,
    /// Salon currency.
    pub currency: Currency,
    /// Timezone defining day boundaries.
    pub tz: Tz,
    /// Reported and comparison periods.
    pub periods: PeriodPair,
    /// Sales in the current period.
    pub current_sales: Vec<Sale>,
    /// Commissions in the current period.
    pub current_commissions: Vec<Commission>,
    /// Sales in the previous period.
    pub previous_sales: Vec<Sale>,
    /// Commissions in the previous period.
    pub previous_commissions: Vec<Commission>,
    /// Appointments of the salon.
    pub appointments: Vec<Appointment>,
    /// Failed sources.
    pub warnings: Vec<SourceWarning>,
}
