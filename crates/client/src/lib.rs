//! HTTP adapter for the upstream salon API.
//!
//! `ApiClient` implements `RecordFetcher` over the REST listings for sales,
//! commissions, appointments and salons. The upstream is loose about
//! response envelopes and numeric encodings; everything is normalized here
//! so the core only sees typed records.

pub mod client;
pub mod decimal;
pub mod envelope;

mod dto;

pub use client::ApiClient;
