// Mapping of domain errors onto HTTP responses
use crate::domain::error::DashboardError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::InvalidConfiguration { .. }
            | DashboardError::UnknownSeverity(_)
            | DashboardError::UnknownMode(_) => StatusCode::BAD_REQUEST,
            DashboardError::UnknownPanel(_) | DashboardError::UnknownMedicine(_) => {
                StatusCode::NOT_FOUND
            }
            DashboardError::Render { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
