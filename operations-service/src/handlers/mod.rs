//! HTTP handlers for operations-service.

pub mod health;
pub mod heximal;
pub mod matrix;

use crate::error::{OperationError, OperationRejection};
use axum::{http::StatusCode, response::IntoResponse};
use serde::de::DeserializeOwned;

pub const INCORRECT_METHOD: &str = "Incorrect http method\n";

/// Method fallback for every operation route.
pub async fn incorrect_method() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, INCORRECT_METHOD)
}

/// Parse a JSON request body. A malformed body short-circuits with
/// `DecodeFailure`, echoing whatever `operation_type` can still be read from it.
pub(crate) fn decode_request<T: DeserializeOwned>(body: &[u8]) -> Result<T, OperationRejection> {
    serde_json::from_slice(body).map_err(|e| {
        OperationRejection::new(
            OperationError::DecodeFailure(e.to_string()),
            recover_operation_type(body),
        )
    })
}

fn recover_operation_type(body: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("operation_type")?.as_str().map(str::to_string))
        .unwrap_or_default()
}
