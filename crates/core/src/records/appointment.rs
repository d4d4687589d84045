//! Appointment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use salonledger_shared::types::{AppointmentId, CustomerId, EmployeeId, SalonId, ServiceId};

/// Booking lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Requested, not yet accepted.
    Pending,
    /// Slot reserved.
    Booked,
    /// Confirmed by the salon.
    Confirmed,
    /// Service under way.
    InProgress,
    /// Service delivered.
    Completed,
    /// Cancelled by either side.
    Cancelled,
    /// Customer did not show up.
    NoShow,
}

impl AppointmentStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::Booked,
        Self::Confirmed,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
        Self::NoShow,
    ];

    /// Returns true for bookings that have not started yet.
    #[must_use]
    pub const fn is_upcoming(self) -> bool {
        matches!(self, Self::Pending | Self::Booked | Self::Confirmed)
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(Self::Pending),
            "booked" => Ok(Self::Booked),
            "confirmed" => Ok(Self::Confirmed),
            "in_progress" | "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            "no_show" | "noshow" => Ok(Self::NoShow),
            _ => Err(format!("Unknown appointment status: {s}")),
        }
    }
}

/// A scheduled or completed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Appointment ID.
    pub id: AppointmentId,
    /// Salon.
    pub salon_id: Option<SalonId>,
    /// Customer.
    pub customer_id: Option<CustomerId>,
    /// Service booked.
    pub service_id: Option<ServiceId>,
    /// Employee assigned.
    pub employee_id: Option<EmployeeId>,
    /// Scheduled start.
    pub scheduled_start: DateTime<Utc>,
    /// Scheduled end.
    pub scheduled_end: DateTime<Utc>,
    /// Current status.
    pub status: AppointmentStatus,
}
