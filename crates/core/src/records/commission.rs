//! Commission records.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use salonledger_shared::types::{CommissionId, EmployeeId, SalonId};

/// What generated a commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionSource {
    /// Earned on a sale.
    Sale,
    /// Earned on a completed appointment.
    Appointment,
    /// Metadata did not say.
    Unknown,
}

impl CommissionSource {
    /// Parses the metadata tag, mapping anything else to `Unknown`.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "sale" => Self::Sale,
            "appointment" => Self::Appointment,
            _ => Self::Unknown,
        }
    }
}

/// The employee a commission is owed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    /// Salon employee ID.
    pub id: EmployeeId,
    /// Full name, if the upstream included it.
    pub full_name: Option<String>,
}

/// A payable owed to an employee.
///
/// Created unpaid upstream and marked paid exactly once; this crate never
/// changes either state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    /// Commission ID.
    pub id: CommissionId,
    /// Employee owed.
    pub employee: Option<EmployeeRef>,
    /// Commission amount.
    pub amount: Decimal,
    /// Commission rate in percent.
    pub commission_rate: Decimal,
    /// Amount of the sale or appointment the commission was computed on.
    pub sale_amount: Decimal,
    /// Whether the commission has been paid out.
    pub paid: bool,
    /// When it was paid out.
    pub paid_at: Option<DateTime<Utc>>,
    /// Payout method.
    pub payment_method: Option<String>,
    /// Payout reference.
    pub payment_reference: Option<String>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// What generated the commission.
    pub source: CommissionSource,
}

/// Filter for commission listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionQuery {
    /// Restrict to one salon.
    pub salon_id: Option<SalonId>,
    /// Restrict to one employee.
    pub employee_id: Option<EmployeeId>,
    /// Restrict to paid or unpaid.
    pub paid: Option<bool>,
    /// First creation day.
    pub start_date: Option<NaiveDate>,
    /// Last creation day.
    pub end_date: Option<NaiveDate>,
}

impl CommissionQuery {
    /// All commissions of a salon created within the window.
    #[must_use]
    pub fn for_salon(salon_id: SalonId, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            salon_id: Some(salon_id),
            start_date: Some(start_date),
            end_date: Some(end_date),
            ..Self::default()
        }
    }
}
