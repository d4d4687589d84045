//! Read-only input records.
//!
//! These are the normalized shapes the aggregation code works on. Every
//! numeric field is already a `Decimal`; coercion of loosely typed upstream
//! payloads happens in the fetching adapter, never here.

pub mod appointment;
pub mod commission;
pub mod sale;

pub use appointment::{Appointment, AppointmentStatus};
pub use commission::{Commission, CommissionQuery, CommissionSource, EmployeeRef};
pub use sale::{LineItemKind, PaymentMethod, Sale, SaleItem};

use serde::{Deserialize, Serialize};
use salonledger_shared::types::SalonId;

/// A salon the caller can report on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalonRef {
    /// Salon ID.
    pub id: SalonId,
    /// Display name.
    pub name: String,
}
