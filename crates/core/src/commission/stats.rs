//! Paid and unpaid commission totals.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use salonledger_shared::types::EmployeeId;

use crate::aggregate::service::UNKNOWN_EMPLOYEE;
use crate::records::{Commission, CommissionSource};

/// Unpaid balance owed to one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayable {
    /// Employee, when known.
    pub employee_id: Option<EmployeeId>,
    /// Display name.
    pub name: String,
    /// Unpaid amount.
    pub unpaid_amount: Decimal,
    /// Unpaid commissions.
    pub unpaid_count: u64,
}

/// Commission totals split by payout state and source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionStats {
    /// All commissions.
    pub total_amount: Decimal,
    /// Number of commissions.
    pub total_count: u64,
    /// Already paid out.
    pub paid_amount: Decimal,
    /// Paid commissions.
    pub paid_count: u64,
    /// Still owed.
    pub unpaid_amount: Decimal,
    /// Unpaid commissions.
    pub unpaid_count: u64,
    /// Earned on sales.
    pub from_sales: Decimal,
    /// Earned on appointments.
    pub from_appointments: Decimal,
    /// Unpaid balances per employee, largest first.
    pub payables: Vec<EmployeePayable>,
}

impl CommissionStats {
    /// Computes totals over a commission list.
    #[must_use]
    pub fn from_commissions(commissions: &[Commission]) -> Self {
        let mut stats = Self {
            total_amount: Decimal::ZERO,
            total_count: 0,
            paid_amount: Decimal::ZERO,
            paid_count: 0,
            unpaid_amount: Decimal::ZERO,
            unpaid_count: 0,
            from_sales: Decimal::ZERO,
            from_appointments: Decimal::ZERO,
            payables: Vec::new(),
        };

        let mut payables: HashMap<Option<EmployeeId>, EmployeePayable> = HashMap::new();

        for commission in commissions {
            stats.total_amount = stats.total_amount.saturating_add(commission.amount);
            stats.total_count += 1;

            match commission.source {
                CommissionSource::Sale => {
                    stats.from_sales = stats.from_sales.saturating_add(commission.amount);
                }
                CommissionSource::Appointment => {
                    stats.from_appointments =
                        stats.from_appointments.saturating_add(commission.amount);
                }
                CommissionSource::Unknown => {}
            }

            if commission.paid {
                stats.paid_amount = stats.paid_amount.saturating_add(commission.amount);
                stats.paid_count += 1;
                continue;
            }

            stats.unpaid_amount = stats.unpaid_amount.saturating_add(commission.amount);
            stats.unpaid_count += 1;

            let employee_id = commission.employee.as_ref().map(|e| e.id);
            let payable = payables
                .entry(employee_id)
                .or_insert_with(|| EmployeePayable {
                    employee_id,
                    name: commission
                        .employee
                        .as_ref()
                        .and_then(|e| e.full_name.clone())
                        .filter(|name| !name.trim().is_empty())
                        .unwrap_or_else(|| UNKNOWN_EMPLOYEE.to_string()),
                    unpaid_amount: Decimal::ZERO,
                    unpaid_count: 0,
                });
            payable.unpaid_amount = payable.unpaid_amount.saturating_add(commission.amount);
            payable.unpaid_count += 1;
        }

        let mut payables: Vec<EmployeePayable> = payables.into_values().collect();
        payables.sort_by(|a, b| {
            b.unpaid_amount
                .cmp(&a.unpaid_amount)
                .then_with(|| a.name.cmp(&b.name))
        });
        stats.payables = payables;
        stats
    }
}
