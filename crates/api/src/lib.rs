//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for financial reports and commission summaries
//! - Bearer token middleware
//! - JSON error responses

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::{Router, http::header::AUTHORIZATION};
use salonledger_client::ApiClient;
use salonledger_core::period::ReportClock;
use salonledger_core::report::RecordFetcher;
use salonledger_shared::types::Currency;
use tokio_util::sync::CancellationToken;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::Caller;

/// Hands out a record fetcher acting for one caller.
pub trait FetcherProvider: Send + Sync {
    /// Returns a fetcher that authenticates upstream as `caller`.
    fn for_caller(&self, caller: &Caller) -> Arc<dyn RecordFetcher>;
}

impl FetcherProvider for ApiClient {
    fn for_caller(&self, caller: &Caller) -> Arc<dyn RecordFetcher> {
        Arc::new(self.with_bearer(caller.token()))
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of per-caller record fetchers.
    pub fetchers: Arc<dyn FetcherProvider>,
    /// Clock defining the salon's calendar days.
    pub clock: ReportClock,
    /// Salon currency.
    pub currency: Currency,
    /// Cancelled on shutdown; every request runs under a child token.
    pub shutdown: CancellationToken,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(SetSensitiveRequestHeadersLayer::new([AUTHORIZATION]))
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
