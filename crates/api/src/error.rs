//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use salonledger_core::period::PeriodError;
use salonledger_core::report::ReportError;
use salonledger_shared::AppError;
use serde_json::json;
use tracing::{error, warn};

/// Handler error rendered as `{error, message}` with the matching status.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        Self(err.into())
    }
}

impl From<PeriodError> for ApiError {
    fn from(err: PeriodError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            warn!(error = %self.0, "Request rejected");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string()
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::from(ReportError::NoSalonAvailable), StatusCode::NOT_FOUND)]
    #[case(ApiError::from(ReportError::Cancelled), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(ApiError::from(PeriodError::IncompleteBounds), StatusCode::BAD_REQUEST)]
    #[case(ApiError::from(AppError::Upstream("down".into())), StatusCode::BAD_GATEWAY)]
    fn test_status_mapping(#[case] err: ApiError, #[case] expected: StatusCode) {
        assert_eq!(err.into_response().status(), expected);
    }
}
