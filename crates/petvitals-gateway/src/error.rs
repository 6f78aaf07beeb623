//! HTTP mapping for `VitalsError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use petvitals_core::error::{ErrorCode, VitalsError};

/// Handler error: a `VitalsError` rendered as `{ "error", "message" }`.
#[derive(Debug)]
pub struct ApiError(pub VitalsError);

impl From<VitalsError> for ApiError {
    fn from(e: VitalsError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.code() {
            ErrorCode::UnsupportedSpecies
            | ErrorCode::InvalidMeasurement
            | ErrorCode::BadRequest
            | ErrorCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.0.code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
