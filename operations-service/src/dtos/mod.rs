//! Wire shapes of the JSON endpoints.
//!
//! Request fields default to their zero values when absent, so a body that
//! omits an operand still reaches validation and is refused there.

use crate::models::{Matrix, OperationType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MatrixRequest {
    #[serde(default)]
    pub matrix_1: Matrix,
    #[serde(default)]
    pub matrix_2: Matrix,
    #[serde(default)]
    pub operation_type: OperationType,
}

#[derive(Debug, Serialize)]
pub struct MatrixResponse {
    pub matrix: Matrix,
    pub operation_type: OperationType,
}

#[derive(Debug, Deserialize)]
pub struct HexRequest {
    #[serde(default)]
    pub heximal_1: String,
    #[serde(default)]
    pub heximal_2: String,
    #[serde(default)]
    pub operation_type: OperationType,
}

#[derive(Debug, Serialize)]
pub struct HexResponse {
    pub heximal: String,
    pub operation_type: OperationType,
}
