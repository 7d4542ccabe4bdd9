//! Product of two heximal numerals.

use crate::error::OperationError;
use crate::models::HexNumeral;

/// Validates both operands, each independently, before anything is computed.
pub fn validate_operands(h1: &str, h2: &str) -> Result<(HexNumeral, HexNumeral), OperationError> {
    match (HexNumeral::parse(h1), HexNumeral::parse(h2)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(OperationError::NotHeximal),
    }
}

/// Multiplies two numerals as signed 64-bit integers (wrapping on overflow)
/// and returns the lowercase hex encoding of the product.
pub fn multiply(h1: &HexNumeral, h2: &HexNumeral) -> String {
    HexNumeral::encode(h1.value().wrapping_mul(h2.value()))
}
