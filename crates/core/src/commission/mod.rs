//! Commission payables.
//!
//! This module provides the views the commissions screen needs on top of
//! the accrual totals used by financial reports:
//! - Paid versus unpaid totals, per source and per employee
//! - The selection used to pay several commissions at once

pub mod selection;
pub mod stats;


pub use selection::{CommissionSelection, SelectionTotal};
pub use stats::{CommissionStats, EmployeePayable};
