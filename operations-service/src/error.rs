use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Every way a single arithmetic request can be refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("Matrix dimension mismatch")]
    DimensionMismatch,

    #[error("Matrix result too large")]
    ResultTooLarge,

    #[error("Not a heximal number")]
    NotHeximal,

    #[error("Invalid request body: {0}")]
    DecodeFailure(String),

    #[error("Unsupported operation type: {0:?}")]
    UnsupportedOperation(String),
}

impl OperationError {
    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            OperationError::DimensionMismatch => "dimension_mismatch",
            OperationError::ResultTooLarge => "result_too_large",
            OperationError::NotHeximal => "not_heximal",
            OperationError::DecodeFailure(_) => "decode_failure",
            OperationError::UnsupportedOperation(_) => "unsupported_operation",
        }
    }
}

/// An [`OperationError`] paired with the operation type the client sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRejection {
    pub error: OperationError,
    pub operation_type: String,
}

impl OperationRejection {
    pub fn new(error: OperationError, operation_type: impl Into<String>) -> Self {
        Self {
            error,
            operation_type: operation_type.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub operation_type: String,
}

impl IntoResponse for OperationRejection {
    fn into_response(self) -> Response {
        tracing::warn!(
            kind = self.error.kind(),
            operation_type = %self.operation_type,
            "Rejected operation: {}",
            self.error
        );

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.error.to_string(),
                operation_type: self.operation_type,
            }),
        )
            .into_response()
    }
}
