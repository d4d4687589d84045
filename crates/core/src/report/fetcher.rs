//! Record fetching boundary.

use async_trait::async_trait;
use salonledger_shared::types::SalonId;
use thiserror::Error;

use crate::period::Period;
use crate::records::{Appointment, Commission, CommissionQuery, Sale, SalonRef};

/// Failure of one record listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never got a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The upstream answered with a non-success status.
    #[error("Upstream returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Source of the records a report is built from.
///
/// Implementations are expected to return every page of a listing; the
/// pipeline treats each call as one all-or-nothing source.
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    /// Sales of a salon created within the period.
    async fn fetch_sales(&self, salon_id: SalonId, period: &Period)
    -> Result<Vec<Sale>, FetchError>;

    /// Commissions matching the query.
    async fn fetch_commissions(
        &self,
        query: &CommissionQuery,
    ) -> Result<Vec<Commission>, FetchError>;

    /// Appointments of a salon.
    async fn fetch_appointments(&self, salon_id: SalonId) -> Result<Vec<Appointment>, FetchError>;

    /// Salons the caller can report on.
    async fn fetch_salons(&self) -> Result<Vec<SalonRef>, FetchError>;
}
