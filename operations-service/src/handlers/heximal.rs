use crate::dtos::{HexRequest, HexResponse};
use crate::error::{OperationError, OperationRejection};
use crate::handlers::decode_request;
use crate::models::OperationType;
use crate::services::{heximal, record_operation};
use axum::Json;
use bytes::Bytes;

const ENDPOINT: &str = "heximal_operations";

pub async fn heximal_operations(body: Bytes) -> Result<Json<HexResponse>, OperationRejection> {
    let result = compute(&body);
    record_operation(
        ENDPOINT,
        match &result {
            Ok(_) => "success",
            Err(rejection) => rejection.error.kind(),
        },
    );
    result.map(Json)
}

fn compute(body: &[u8]) -> Result<HexResponse, OperationRejection> {
    let request: HexRequest = decode_request(body)?;

    let (h1, h2) = heximal::validate_operands(&request.heximal_1, &request.heximal_2)
        .map_err(|e| OperationRejection::new(e, request.operation_type.as_str()))?;

    match request.operation_type {
        OperationType::Multiply => {
            let product = heximal::multiply(&h1, &h2);
            tracing::debug!(lhs = %h1, rhs = %h2, product = %product, "Heximal product computed");

            Ok(HexResponse {
                heximal: product,
                operation_type: OperationType::Multiply,
            })
        }
        OperationType::Unsupported(tag) => Err(OperationRejection::new(
            OperationError::UnsupportedOperation(tag.clone()),
            tag,
        )),
    }
}
