//! Commission routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::{AppState, error::ApiError, middleware::Caller};
use salonledger_core::commission::{CommissionSelection, CommissionStats, SelectionTotal};
use salonledger_core::period::Period;
use salonledger_core::records::CommissionQuery;
use salonledger_core::report::ReportPipeline;
use salonledger_shared::AppError;
use salonledger_shared::types::{CommissionId, EmployeeId, SalonId};

/// Creates the commission routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/salons/{salon_id}/commissions/summary",
            get(get_commission_summary),
        )
        .route(
            "/salons/{salon_id}/commissions/selection",
            post(total_selection),
        )
}

/// Query parameters for the commission summary.
#[derive(Debug, Default, Deserialize)]
pub struct CommissionSummaryQuery {
    /// Restrict to one employee.
    pub employee_id: Option<EmployeeId>,
    /// Restrict to paid or unpaid.
    pub paid: Option<bool>,
    /// First creation day.
    pub start: Option<NaiveDate>,
    /// Last creation day.
    pub end: Option<NaiveDate>,
}

/// Commissions picked for a bulk payout.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionRequest {
    /// Explicitly selected commissions.
    #[serde(default)]
    pub commission_ids: Vec<CommissionId>,
    /// Also select every unpaid commission of the salon.
    #[serde(default)]
    pub select_all_unpaid: bool,
}

/// GET /salons/{salon_id}/commissions/summary - Paid and unpaid totals.
async fn get_commission_summary(
    State(state): State<AppState>,
    caller: Caller,
    Path(salon_id): Path<SalonId>,
    Query(params): Query<CommissionSummaryQuery>,
) -> Result<Json<CommissionStats>, ApiError> {
    if let (Some(start), Some(end)) = (params.start, params.end) {
        Period::custom(start, end)?;
    }

    let query = CommissionQuery {
        salon_id: Some(salon_id),
        employee_id: params.employee_id,
        paid: params.paid,
        start_date: params.start,
        end_date: params.end,
    };

    let fetcher = state.fetchers.for_caller(&caller);
    let cancel = state.shutdown.child_token();
    let stats = ReportPipeline::commission_summary(fetcher.as_ref(), &query, &cancel).await?;

    Ok(Json(stats))
}

/// POST /salons/{salon_id}/commissions/selection - Payable total of a selection.
///
/// Paid commissions in the selection are left out of the total.
async fn total_selection(
    State(state): State<AppState>,
    caller: Caller,
    Path(salon_id): Path<SalonId>,
    Json(body): Json<SelectionRequest>,
) -> Result<Json<SelectionTotal>, ApiError> {
    if body.commission_ids.is_empty() && !body.select_all_unpaid {
        return Err(AppError::Validation(
            "commission_ids or select_all_unpaid is required".to_string(),
        )
        .into());
    }

    let query = CommissionQuery {
        salon_id: Some(salon_id),
        ..CommissionQuery::default()
    };

    let fetcher = state.fetchers.for_caller(&caller);
    let cancel = state.shutdown.child_token();
    let commissions = ReportPipeline::commissions(fetcher.as_ref(), &query, &cancel).await?;

    let mut selection = CommissionSelection::from_ids(body.commission_ids);
    if body.select_all_unpaid {
        selection.select_all_unpaid(&commissions);
    }
    let total = selection.total(&commissions);

    info!(
        salon_id = %salon_id,
        count = total.count,
        skipped_paid = total.skipped_paid,
        "Commission selection totalled"
    );

    Ok(Json(total))
}
