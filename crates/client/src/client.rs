//! Upstream API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use salonledger_core::period::Period;
use salonledger_core::records::{Appointment, Commission, CommissionQuery, Sale, SalonRef};
use salonledger_core::report::{FetchError, RecordFetcher};
use salonledger_shared::config::UpstreamConfig;
use salonledger_shared::types::{PageRequest, SalonId};
use salonledger_shared::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::dto::{AppointmentDto, CommissionDto, SaleDto, SalonDto};
use crate::envelope::unwrap_list;

/// Longest error body kept in a `FetchError::Status`.
const MAX_ERROR_BODY: usize = 512;

/// Client for the upstream salon REST API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    bearer: Option<String>,
    page_size: u32,
    max_pages: u32,
}

impl ApiClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(config: &UpstreamConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer: None,
            page_size: config.page_size.max(1),
            max_pages: config.max_pages.max(1),
        })
    }

    /// Returns a client that sends the caller's bearer token.
    #[must_use]
    pub fn with_bearer(&self, token: impl Into<String>) -> Self {
        Self {
            bearer: Some(token.into()),
            ..self.clone()
        }
    }

    /// Fetches every page of a listing and decodes each record.
    ///
    /// Records that fail to decode are logged and skipped.
    async fn fetch_list<T, R>(
        &self,
        path: &str,
        resource: &str,
        query: &[(&str, String)],
        convert: impl Fn(T) -> Result<R, String>,
    ) -> Result<Vec<R>, FetchError>
    where
        T: DeserializeOwned,
    {
        let mut records = Vec::new();
        let mut page = PageRequest::first(self.page_size);

        loop {
            let body = self.get_page(path, query, page).await?;
            let list = unwrap_list(body, resource)?;
            let received = list.records.len();

            debug!(resource, page = page.page, received, "Fetched upstream page");

            for raw in list.records {
                match serde_json::from_value::<T>(raw)
                    .map_err(|e| e.to_string())
                    .and_then(&convert)
                {
                    Ok(record) => records.push(record),
                    Err(e) => warn!(resource, error = %e, "Skipping undecodable record"),
                }
            }

            let has_next = list.meta.is_some_and(|meta| meta.has_next());
            if received == 0 || !has_next {
                break;
            }
            if page.page >= self.max_pages {
                warn!(resource, max_pages = self.max_pages, "Stopped paging at page limit");
                break;
            }
            page = page.next();
        }

        Ok(records)
    }

    async fn get_page(
        &self,
        path: &str,
        query: &[(&str, String)],
        page: PageRequest,
    ) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .get(&url)
            .query(query)
            .query(&page.query_pairs());
        if let Some(token) = &self.bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status,
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(format!("invalid JSON from {path}: {e}")))
    }
}

fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_decode() {
        FetchError::Decode(err.to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}

fn commission_params(query: &CommissionQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(salon_id) = query.salon_id {
        params.push(("salonId", salon_id.to_string()));
    }
    if let Some(employee_id) = query.employee_id {
        params.push(("employeeId", employee_id.to_string()));
    }
    if let Some(paid) = query.paid {
        params.push(("paid", paid.to_string()));
    }
    if let Some(start) = query.start_date {
        params.push(("startDate", start.to_string()));
    }
    if let Some(end) = query.end_date {
        params.push(("endDate", end.to_string()));
    }
    params
}

#[async_trait]
impl RecordFetcher for ApiClient {
    async fn fetch_sales(&self, salon_id: SalonId, period: &Period) -> Result<Vec<Sale>, FetchError> {
        let query = [
            ("salonId", salon_id.to_string()),
            ("startDate", period.start_date.to_string()),
            ("endDate", period.end_date.to_string()),
        ];
        self.fetch_list::<SaleDto, _>("/sales", "sales", &query, |dto| Ok(dto.into()))
            .await
    }

    async fn fetch_commissions(
        &self,
        query: &CommissionQuery,
    ) -> Result<Vec<Commission>, FetchError> {
        let params = commission_params(query);
        self.fetch_list::<CommissionDto, _>("/commissions", "commissions", &params, |dto| {
            Ok(dto.into())
        })
        .await
    }

    async fn fetch_appointments(&self, salon_id: SalonId) -> Result<Vec<Appointment>, FetchError> {
        let query = [("salonId", salon_id.to_string())];
        self.fetch_list::<AppointmentDto, _>(
            "/appointments",
            "appointments",
            &query,
            Appointment::try_from,
        )
        .await
    }

    async fn fetch_salons(&self) -> Result<Vec<SalonRef>, FetchError> {
        self.fetch_list::<SalonDto, _>("/salons", "salons", &[], |dto| Ok(dto.into()))
            .await
    }
}
