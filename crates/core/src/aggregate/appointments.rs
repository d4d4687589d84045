//! Appointment statistics.

use std::collections::BTreeMap;

use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::comparison::ratio_percent;
use crate::period::Period;
use crate::records::{Appointment, AppointmentStatus};

/// Booking counts for a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentStats {
    /// Appointments scheduled to start within the window.
    pub total: u64,
    /// Count per status; every status is present.
    pub by_status: BTreeMap<AppointmentStatus, u64>,
    /// Completed appointments.
    pub completed: u64,
    /// Cancelled appointments.
    pub cancelled: u64,
    /// No-shows.
    pub no_show: u64,
    /// Pending, booked, or confirmed.
    pub upcoming: u64,
    /// Completed as a percentage of the total.
    pub completion_rate: Decimal,
}

impl AppointmentStats {
    /// Counts appointments whose local start date falls in `period`.
    #[must_use]
    pub fn from_appointments(appointments: &[Appointment], period: &Period, tz: Tz) -> Self {
        let mut by_status: BTreeMap<AppointmentStatus, u64> =
            AppointmentStatus::ALL.iter().map(|s| (*s, 0)).collect();

        let in_period = appointments
            .iter()
            .filter(|a| period.contains(a.scheduled_start.with_timezone(&tz).date_naive()));

        let mut total = 0u64;
        for appointment in in_period {
            total += 1;
            *by_status.entry(appointment.status).or_insert(0) += 1;
        }

        let count = |status: AppointmentStatus| by_status.get(&status).copied().unwrap_or(0);
        let completed = count(AppointmentStatus::Completed);
        let upcoming: u64 = AppointmentStatus::ALL
            .iter()
            .filter(|s| s.is_upcoming())
            .map(|s| count(*s))
            .sum();
        let cancelled = count(AppointmentStatus::Cancelled);
        let no_show = count(AppointmentStatus::NoShow);

        Self {
            total,
            completed,
            cancelled,
            no_show,
            upcoming,
            completion_rate: ratio_percent(Decimal::from(completed), Decimal::from(total)),
            by_status,
        }
    }
}
