//! Aggregation data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the period closed in profit or at a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitMode {
    /// Net income is zero or positive.
    Profit,
    /// Net income is negative.
    Loss,
}

impl ProfitMode {
    /// Mode for a net income figure.
    #[must_use]
    pub fn from_net_income(net_income: Decimal) -> Self {
        if net_income < Decimal::ZERO {
            Self::Loss
        } else {
            Self::Profit
        }
    }
}

/// One slice of a category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// Category label.
    pub label: String,
    /// Summed amount.
    pub amount: Decimal,
    /// Share of the breakdown total, rounded to a whole percent.
    pub percentage: Decimal,
    /// Number of records in the category.
    pub count: u64,
}

/// Figures for one set of sales and commissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Sum of sale totals.
    pub revenue: Decimal,
    /// Sum of all commission amounts, paid or not.
    pub expenses: Decimal,
    /// Revenue minus expenses.
    pub net_income: Decimal,
    /// Net income as a percentage of revenue.
    pub profit_margin: Decimal,
    /// Profit or loss.
    pub mode: ProfitMode,
    /// Number of sales.
    pub sales_count: u64,
    /// Revenue per sale.
    pub average_sale: Decimal,
    /// Number of commissions.
    pub commission_count: u64,
    /// Revenue by payment method.
    pub payment_methods: Vec<BreakdownEntry>,
    /// Commission expenses by employee.
    pub expenses_by_employee: Vec<BreakdownEntry>,
    /// Line-item revenue by service or product.
    pub revenue_by_service: Vec<BreakdownEntry>,
}
