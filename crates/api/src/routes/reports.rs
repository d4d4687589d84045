//! Financial report routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::{AppState, error::ApiError, middleware::Caller};
use salonledger_core::period::{PeriodSelection, PeriodToken};
use salonledger_core::report::{FinancialSummary, ReportPipeline, ReportRequest};
use salonledger_shared::types::SalonId;

/// Period used when a request names none.
pub const DEFAULT_PERIOD: PeriodToken = PeriodToken::Month;

/// Creates the report routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/financial", get(get_default_salon_report))
        .route(
            "/salons/{salon_id}/reports/financial",
            get(get_salon_report),
        )
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for financial reports.
#[derive(Debug, Default, Deserialize)]
pub struct FinancialReportQuery {
    /// Named period such as `week` or `last30days`.
    pub period: Option<String>,
    /// Custom period start; requires `end`.
    pub start: Option<NaiveDate>,
    /// Custom period end; requires `start`.
    pub end: Option<NaiveDate>,
}

impl FinancialReportQuery {
    fn selection(&self) -> Result<PeriodSelection, ApiError> {
        Ok(PeriodSelection::from_parts(
            self.period.as_deref(),
            self.start,
            self.end,
            DEFAULT_PERIOD,
        )?)
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /reports/financial - Report for the caller's first salon.
async fn get_default_salon_report(
    State(state): State<AppState>,
    caller: Caller,
    Query(query): Query<FinancialReportQuery>,
) -> Result<Json<FinancialSummary>, ApiError> {
    run_report(&state, &caller, None, &query).await
}

/// GET /salons/{salon_id}/reports/financial - Report for one salon.
async fn get_salon_report(
    State(state): State<AppState>,
    caller: Caller,
    Path(salon_id): Path<SalonId>,
    Query(query): Query<FinancialReportQuery>,
) -> Result<Json<FinancialSummary>, ApiError> {
    run_report(&state, &caller, Some(salon_id), &query).await
}

async fn run_report(
    state: &AppState,
    caller: &Caller,
    salon_id: Option<SalonId>,
    query: &FinancialReportQuery,
) -> Result<Json<FinancialSummary>, ApiError> {
    let request = ReportRequest {
        salon_id,
        selection: query.selection()?,
        today: state.clock.today(),
        tz: state.clock.tz(),
        currency: state.currency,
    };

    let fetcher = state.fetchers.for_caller(caller);
    let cancel = state.shutdown.child_token();
    let summary = ReportPipeline::run(fetcher.as_ref(), &request, &cancel).await?;

    info!(
        salon_id = %summary.salon_id,
        start = %summary.periods.current.start_date,
        end = %summary.periods.current.end_date,
        degraded = summary.degraded,
        "Financial report generated"
    );

    Ok(Json(summary))
}
