use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use labelwise_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Analysis failed.")]
    AnalysisFailed,

    #[error("{0}")]
    InternalServerError(String),
}

/// Error body shape shared by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AnalysisFailed | ApiError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::NoTextDetected => {
                ApiError::BadRequest("No text detected in the image.".to_string())
            }
            CoreError::AnalysisFailed => ApiError::AnalysisFailed,
            CoreError::ExternalService(message) => {
                tracing::error!("upstream service error: {}", message);
                ApiError::InternalServerError("Internal server error.".to_string())
            }
            CoreError::NotFound => ApiError::NotFound("Resource not found.".to_string()),
            CoreError::Internal(message) => {
                tracing::error!("internal error: {}", message);
                ApiError::InternalServerError("Internal server error.".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_expected_statuses() {
        let cases = [
            (CoreError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (CoreError::NoTextDetected, StatusCode::BAD_REQUEST),
            (CoreError::AnalysisFailed, StatusCode::INTERNAL_SERVER_ERROR),
            (
                CoreError::ExternalService("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            let response = ApiError::from(error).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let error = ApiError::from(CoreError::Internal("connection string".into()));
        assert_eq!(error.to_string(), "Internal server error.");
    }
}
