//! Request middleware.

pub mod auth;

pub use auth::{Caller, auth_middleware};
