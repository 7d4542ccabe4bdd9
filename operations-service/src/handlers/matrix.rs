use crate::dtos::{MatrixRequest, MatrixResponse};
use crate::error::{OperationError, OperationRejection};
use crate::handlers::decode_request;
use crate::models::OperationType;
use crate::services::{matrix, record_operation};
use crate::startup::AppState;
use axum::{extract::State, Json};
use bytes::Bytes;

const ENDPOINT: &str = "matrix_operations";

pub async fn matrix_operations(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MatrixResponse>, OperationRejection> {
    let result = compute(&state, &body);
    record_operation(
        ENDPOINT,
        match &result {
            Ok(_) => "success",
            Err(rejection) => rejection.error.kind(),
        },
    );
    result.map(Json)
}

fn compute(state: &AppState, body: &[u8]) -> Result<MatrixResponse, OperationRejection> {
    let MatrixRequest {
        matrix_1,
        matrix_2,
        operation_type,
    } = decode_request(body)?;

    let reject = |error: OperationError| OperationRejection::new(error, operation_type.as_str());

    matrix::validate_dimensions(&matrix_1, &matrix_2).map_err(reject)?;

    match operation_type {
        OperationType::Multiply => {
            matrix::check_result_size(&matrix_1, &matrix_2, state.limits.max_result_cells)
                .map_err(reject)?;

            let product = matrix::multiply(&matrix_1, &matrix_2);
            tracing::debug!(
                rows = product.rows(),
                columns = product.columns(),
                "Matrix product computed"
            );

            Ok(MatrixResponse {
                matrix: product,
                operation_type,
            })
        }
        OperationType::Unsupported(ref tag) => {
            Err(reject(OperationError::UnsupportedOperation(tag.clone())))
        }
    }
}
