//! Aggregation service.

use rust_decimal::Decimal;

use super::breakdown::BreakdownBuilder;
use super::types::{Aggregation, BreakdownEntry, ProfitMode};
use crate::comparison::ratio_percent;
use crate::records::{Commission, Sale};

/// Label for commissions whose employee has no name.
pub const UNKNOWN_EMPLOYEE: &str = "Unknown Employee";
/// Label for the single slice used when no commission names an employee.
pub const EMPLOYEE_COMMISSIONS: &str = "Employee Commissions";
/// Label for the single slice used when no sale has line items.
pub const SALES_FALLBACK: &str = "Sales";

/// Adds amounts, clamping at the bounds of `Decimal` instead of overflowing.
#[must_use]
pub fn saturating_sum<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Reduces records into summary figures.
pub struct Aggregator;

impl Aggregator {
    /// Aggregates one window's sales and commissions.
    ///
    /// Commissions count as expenses when earned, whether or not they have
    /// been paid out.
    #[must_use]
    pub fn aggregate(sales: &[Sale], commissions: &[Commission]) -> Aggregation {
        let revenue = Self::revenue(sales);
        let expenses = Self::expenses(commissions);
        let net_income = revenue.saturating_sub(expenses);
        let sales_count = sales.len() as u64;

        Aggregation {
            revenue,
            expenses,
            net_income,
            profit_margin: ratio_percent(net_income, revenue),
            mode: ProfitMode::from_net_income(net_income),
            sales_count,
            average_sale: Self::average(revenue, sales_count),
            commission_count: commissions.len() as u64,
            payment_methods: Self::by_payment_method(sales),
            expenses_by_employee: Self::by_employee(commissions),
            revenue_by_service: Self::by_service(sales),
        }
    }

    /// Sum of sale totals.
    #[must_use]
    pub fn revenue(sales: &[Sale]) -> Decimal {
        saturating_sum(sales.iter().map(|s| s.total_amount))
    }

    /// Sum of commission amounts regardless of paid status.
    #[must_use]
    pub fn expenses(commissions: &[Commission]) -> Decimal {
        saturating_sum(commissions.iter().map(|c| c.amount))
    }

    /// Revenue grouped by payment method.
    #[must_use]
    pub fn by_payment_method(sales: &[Sale]) -> Vec<BreakdownEntry> {
        let mut builder = BreakdownBuilder::new();
        for sale in sales {
            builder.add(sale.payment_method.as_str(), sale.total_amount);
        }
        builder.finish()
    }

    /// Commission expenses grouped by employee name.
    #[must_use]
    pub fn by_employee(commissions: &[Commission]) -> Vec<BreakdownEntry> {
        let has_any_employee = commissions.iter().any(|c| c.employee.is_some());

        let mut builder = BreakdownBuilder::new();
        if has_any_employee {
            for commission in commissions {
                let label = commission
                    .employee
                    .as_ref()
                    .and_then(|e| e.full_name.as_deref())
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or(UNKNOWN_EMPLOYEE);
                builder.add(label, commission.amount);
            }
        }

        builder.finish_or_fallback(
            EMPLOYEE_COMMISSIONS,
            Self::expenses(commissions),
            commissions.len() as u64,
        )
    }

    /// Line-item revenue grouped by service or product name.
    #[must_use]
    pub fn by_service(sales: &[Sale]) -> Vec<BreakdownEntry> {
        let mut builder = BreakdownBuilder::new();
        for item in sales.iter().flat_map(|s| s.items.iter()) {
            builder.add(item.kind.label(), item.line_total);
        }
        builder.finish_or_fallback(SALES_FALLBACK, Self::revenue(sales), sales.len() as u64)
    }

    fn average(total: Decimal, count: u64) -> Decimal {
        if count == 0 {
            Decimal::ZERO
        } else {
            (total / Decimal::from(count)).round_dp(2)
        }
    }
}
