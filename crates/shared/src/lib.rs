//! Shared types, errors, and configuration for SalonLedger.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for salons, employees, sales, commissions, and appointments
//! - The salon currency enum
//! - Pagination types for upstream list endpoints
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
