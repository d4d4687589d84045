//! Fetch-join-aggregate pipeline.

use chrono::NaiveDate;
use chrono_tz::Tz;
use salonledger_shared::types::{Currency, SalonId};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::error::ReportError;
use super::fetcher::{FetchError, RecordFetcher};
use super::service::ReportService;
use super::types::{FinancialSummary, RecordSource, ReportInput, SourceWarning, Window};
use crate::commission::CommissionStats;
use crate::period::{DateRangeResolver, PeriodPair, PeriodSelection};
use crate::records::{Commission, CommissionQuery};

/// Parameters of one report run.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Salon to report on; the caller's first salon when absent.
    pub salon_id: Option<SalonId>,
    /// Requested period.
    pub selection: PeriodSelection,
    /// Evaluation date in the salon's timezone.
    pub today: NaiveDate,
    /// Timezone defining day boundaries.
    pub tz: Tz,
    /// Salon currency.
    pub currency: Currency,
}

/// Runs reports against a record fetcher.
pub struct ReportPipeline;

impl ReportPipeline {
    /// Produces a financial summary.
    ///
    /// The five listings are fetched concurrently. A listing that fails is
    /// recorded as a warning and treated as empty; only a missing salon, an
    /// invalid period, or cancellation abort the run.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoSalonAvailable` when no salon is named and the
    /// caller has none, `ReportError::Period` for an invalid selection, and
    /// `ReportError::Cancelled` when `cancel` fires first.
    pub async fn run(
        fetcher: &dyn RecordFetcher,
        request: &ReportRequest,
        cancel: &CancellationToken,
    ) -> Result<FinancialSummary, ReportError> {
        let periods = DateRangeResolver::resolve_pair(request.selection, request.today)?;

        let salon_id = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(ReportError::Cancelled),
            salon_id = Self::resolve_salon(fetcher, request.salon_id) => salon_id?,
        };

        debug!(
            salon_id = %salon_id,
            start = %periods.current.start_date,
            end = %periods.current.end_date,
            "Fetching report records"
        );

        let input = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                info!(salon_id = %salon_id, "Report cancelled before fetches completed");
                return Err(ReportError::Cancelled);
            }
            input = Self::fetch_all(fetcher, salon_id, periods, request) => input,
        };

        if !input.warnings.is_empty() {
            warn!(
                salon_id = %salon_id,
                failed_sources = input.warnings.len(),
                "Report built from incomplete data"
            );
        }

        Ok(ReportService::build(input))
    }

    /// Commission statistics for a query.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Source` if the listing fails and
    /// `ReportError::Cancelled` when `cancel` fires first.
    pub async fn commission_summary(
        fetcher: &dyn RecordFetcher,
        query: &CommissionQuery,
        cancel: &CancellationToken,
    ) -> Result<CommissionStats, ReportError> {
        let commissions = Self::commissions(fetcher, query, cancel).await?;
        Ok(CommissionStats::from_commissions(&commissions))
    }

    /// Commission listing under cancellation.
    ///
    /// Unlike report sources, a failure here is the whole result and is
    /// returned as an error.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Source` if the listing fails and
    /// `ReportError::Cancelled` when `cancel` fires first.
    pub async fn commissions(
        fetcher: &dyn RecordFetcher,
        query: &CommissionQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<Commission>, ReportError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(ReportError::Cancelled),
            result = fetcher.fetch_commissions(query) => Ok(result?),
        }
    }

    async fn resolve_salon(
        fetcher: &dyn RecordFetcher,
        requested: Option<SalonId>,
    ) -> Result<SalonId, ReportError> {
        if let Some(salon_id) = requested {
            return Ok(salon_id);
        }

        match fetcher.fetch_salons().await {
            Ok(salons) => salons
                .first()
                .map(|salon| salon.id)
                .ok_or(ReportError::NoSalonAvailable),
            Err(e) => {
                warn!(error = %e, "Failed to list salons");
                Err(ReportError::NoSalonAvailable)
            }
        }
    }

    async fn fetch_all(
        fetcher: &dyn RecordFetcher,
        salon_id: SalonId,
        periods: PeriodPair,
        request: &ReportRequest,
    ) -> ReportInput {
        let current_query = CommissionQuery::for_salon(
            salon_id,
            periods.current.start_date,
            periods.current.end_date,
        );
        let previous_query = CommissionQuery::for_salon(
            salon_id,
            periods.previous.start_date,
            periods.previous.end_date,
        );

        let (current_sales, current_commissions, previous_sales, previous_commissions, appointments) = tokio::join!(
            fetcher.fetch_sales(salon_id, &periods.current),
            fetcher.fetch_commissions(&current_query),
            fetcher.fetch_sales(salon_id, &periods.previous),
            fetcher.fetch_commissions(&previous_query),
            fetcher.fetch_appointments(salon_id),
        );

        let mut warnings = Vec::new();
        ReportInput {
            salon_id,
            currency: request.currency,
            tz: request.tz,
            periods,
            current_sales: recover(current_sales, RecordSource::Sales, Window::Current, &mut warnings),
            current_commissions: recover(
                current_commissions,
                RecordSource::Commissions,
                Window::Current,
                &mut warnings,
            ),
            previous_sales: recover(previous_sales, RecordSource::Sales, Window::Previous, &mut warnings),
            previous_commissions: recover(
                previous_commissions,
                RecordSource::Commissions,
                Window::Previous,
                &mut warnings,
            ),
            appointments: recover(
                appointments,
                RecordSource::Appointments,
                Window::Current,
                &mut warnings,
            ),
            warnings,
        }
    }
}

fn recover<T>(
    result: Result<Vec<T>, FetchError>,
    source: RecordSource,
    window: Window,
    warnings: &mut Vec<SourceWarning>,
) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, source = ?source, window = ?window, "Record source failed");
            warnings.push(SourceWarning {
                source,
                window,
                message: e.to_string(),
            });
            Vec::new()
        }
    }
}
