//! Record aggregation.
//!
//! This module reduces raw sales and commissions into the figures a
//! financial dashboard shows:
//! - Revenue, accrued commission expenses, net income and margin
//! - Percentage breakdowns by payment method, employee, and service/product
//! - Appointment counts per status

pub mod appointments;
pub mod breakdown;
pub mod service;
pub mod types;


pub use appointments::AppointmentStats;
pub use breakdown::BreakdownBuilder;
pub use service::{Aggregator, saturating_sum};
pub use types::*;
