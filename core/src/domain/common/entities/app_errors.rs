use thiserror::Error;

/// Errors produced by the domain services and their adapters.
///
/// Client-facing translation (HTTP status, response body) happens at the API
/// boundary; nothing here carries transport concerns.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("no text detected in the image")]
    NoTextDetected,

    #[error("analysis produced no usable structure")]
    AnalysisFailed,

    #[error("external service error: {0}")]
    ExternalService(String),

    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}
